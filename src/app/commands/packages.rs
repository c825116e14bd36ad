//! Step 1: OS package installation.

use crate::app::{AppContext, output};
use crate::domain::{AppError, StepKind, StepStatus};
use crate::ports::{CertificateSource, CommandRunner};

const STEP: StepKind = StepKind::Packages;

pub fn execute<R: CommandRunner, C: CertificateSource>(
    ctx: &AppContext<R, C>,
) -> Result<StepStatus, AppError> {
    let packages = &ctx.config().packages;
    let tier = ctx.layout().tier;

    if !packages.enabled {
        return Ok(StepStatus::Skipped("disabled in configuration".to_string()));
    }
    if !tier.can_install_packages() {
        return Ok(StepStatus::Skipped(format!(
            "{} tier; Python bindings are verified instead",
            tier
        )));
    }
    if packages.names.is_empty() {
        return Ok(StepStatus::Skipped("no packages configured".to_string()));
    }

    let manager = packages.manager.as_str();
    let mut install_args = vec!["install", "-y"];
    install_args.extend(packages.names.iter().map(String::as_str));

    for args in [vec!["update"], install_args] {
        let label = format!("{} {}", manager, args[0]);
        output::info(STEP, format!("running {}", label));

        let failure = match ctx.runner().run(manager, &args) {
            Ok(result) if result.success => None,
            Ok(result) => Some(format!("{}: {}", label, result.failure_summary())),
            Err(err) => Some(err.to_string()),
        };

        if let Some(message) = failure {
            if packages.strict {
                return Err(AppError::PackageInstall(message));
            }
            output::warn(STEP, &message);
            return Ok(StepStatus::Degraded(message));
        }
    }

    Ok(StepStatus::Completed)
}
