//! Step 6: entry point discovery.

use std::path::Path;

use crate::app::output;
use crate::domain::entry_point::{PACKAGE_DIR, ROOT_ENTRY_FILE};
use crate::domain::{AppError, BootstrapConfig, EntryLocation, EntryPoint, StepKind, StepStatus};

const STEP: StepKind = StepKind::EntryPoint;

/// Prefer `<app_dir>/main.py`, then `<app_dir>/app/main.py`, then the configured fallback.
pub fn discover(app_dir: &Path, config: &BootstrapConfig) -> Result<EntryPoint, AppError> {
    if app_dir.join(ROOT_ENTRY_FILE).is_file() {
        return Ok(EntryPoint::root());
    }
    if app_dir.join(PACKAGE_DIR).join(ROOT_ENTRY_FILE).is_file() {
        return Ok(EntryPoint::package());
    }
    config
        .fallback_module()
        .map(EntryPoint::fallback)
        .ok_or_else(|| AppError::EntryPointNotFound(app_dir.display().to_string()))
}

pub fn execute(
    app_dir: &Path,
    config: &BootstrapConfig,
) -> Result<(StepStatus, EntryPoint), AppError> {
    let entry = discover(app_dir, config)?;
    let status = match entry.location {
        EntryLocation::Root | EntryLocation::Package => {
            output::info(STEP, format!("using module {}", entry.module));
            StepStatus::Completed
        }
        EntryLocation::Fallback => {
            let message = format!(
                "no {} found in {} or {}/, falling back to module {}",
                ROOT_ENTRY_FILE,
                app_dir.display(),
                PACKAGE_DIR,
                entry.module
            );
            output::warn(STEP, &message);
            StepStatus::Degraded(message)
        }
    };
    Ok((status, entry))
}
