//! Check command implementation.

use crate::app::api::BootstrapOptions;
use crate::domain::{AppError, EntryLocation};

pub fn run_check(options: &BootstrapOptions, strict: bool, json: bool) -> Result<i32, AppError> {
    let outcome = crate::app::api::check(options, strict, json)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome.exit_code);
    }

    let missing = outcome.capabilities.missing().count();
    match &outcome.entry_point {
        Some(entry) if entry.location == EntryLocation::Fallback => {
            println!("Entry point: {} (fallback)", entry.module)
        }
        Some(entry) => println!("Entry point: {}", entry.module),
        None => println!("Entry point: not found"),
    }
    if outcome.exit_code == 0 {
        println!("✅ All capabilities available");
    } else if missing > 0 {
        println!("❌ {} capability check(s) failed", missing);
    } else {
        println!("❌ Entry point check failed");
    }

    Ok(outcome.exit_code)
}
