//! Plan and env command implementations.

use crate::app::api::BootstrapOptions;
use crate::domain::AppError;

pub fn run_plan(options: &BootstrapOptions, json: bool) -> Result<(), AppError> {
    let plan = crate::app::api::plan(options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Tier: {}", plan.layout.tier);
    println!("App directory: {}", plan.layout.app_dir.display());
    println!();
    for (index, step) in plan.steps.iter().enumerate() {
        println!("  {}. {} - {}", index + 1, step.step, step.action);
    }
    Ok(())
}

pub fn run_env(options: &BootstrapOptions) -> Result<(), AppError> {
    let exports = crate::app::api::env(options)?;
    print!("{}", exports.to_shell());
    Ok(())
}
