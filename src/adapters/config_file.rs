//! Configuration loading from `appboot.toml`.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, BootstrapConfig, CONFIG_FILE_NAME, parse_config_content};

/// Load configuration.
///
/// An explicit path must exist. Without one, `<app_dir>/appboot.toml` is read when
/// present and defaults are used otherwise.
pub fn load_config(explicit: Option<&Path>, app_dir: &Path) -> Result<BootstrapConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = app_dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(BootstrapConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
