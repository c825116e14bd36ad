//! Step 4: Python dependency installation.

use crate::app::{AppContext, output};
use crate::domain::{AppError, StepKind, StepStatus};
use crate::ports::{CertificateSource, CommandRunner};

const STEP: StepKind = StepKind::Dependencies;

/// Upgrade pip and install the requirements file. Every failure is fatal.
///
/// pip output goes straight to the console.
pub fn execute<R: CommandRunner, C: CertificateSource>(
    ctx: &AppContext<R, C>,
) -> Result<StepStatus, AppError> {
    let config = ctx.config();
    if !config.dependencies.enabled {
        return Ok(StepStatus::Skipped("disabled in configuration".to_string()));
    }

    let requirements = &ctx.layout().requirements_path;
    if !requirements.is_file() {
        return Err(AppError::DependencyInstall(format!(
            "requirements file not found: {}",
            requirements.display()
        )));
    }
    let requirements = requirements.to_string_lossy().into_owned();

    let python = config.python.as_str();
    let steps: [(&str, Vec<&str>); 2] = [
        ("pip upgrade", vec!["-m", "pip", "install", "--upgrade", "pip"]),
        ("pip install", vec!["-m", "pip", "install", "-r", requirements.as_str()]),
    ];

    for (label, args) in steps {
        output::info(STEP, format!("running {}", label));
        let result = ctx
            .runner()
            .run_streamed(python, &args)
            .map_err(|err| AppError::DependencyInstall(err.to_string()))?;
        if !result.success {
            return Err(AppError::DependencyInstall(format!(
                "{}: {}",
                label,
                result.failure_summary()
            )));
        }
    }

    Ok(StepStatus::Completed)
}
