//! Run command implementation.

use crate::app::api::BootstrapOptions;
use crate::domain::AppError;

/// Returns only on failure, or with the server's exit code where exec is unavailable.
pub fn run_bootstrap(options: &BootstrapOptions) -> Result<i32, AppError> {
    crate::app::api::run(options)
}
