//! Step 7: environment export.

use std::ffi::OsString;
use std::path::Path;

use crate::domain::exports::{
    OCR_TEMP_FOLDER, PYTHONPATH, SSL_CERT_PATH, TESSERACT_CMD, UPLOAD_FOLDER, augment_python_path,
};
use crate::domain::{AppError, EnvExports, ResolvedLayout};

/// Build the variables the application reads at startup.
pub fn build(
    layout: &ResolvedLayout,
    upload_folder: &Path,
    tesseract_cmd: Option<&str>,
    existing_python_path: Option<&OsString>,
) -> Result<EnvExports, AppError> {
    let mut exports = EnvExports::default();
    exports.set(PYTHONPATH, augment_python_path(&layout.app_dir, existing_python_path)?);

    let upload = path_value(upload_folder)?;
    exports.set(OCR_TEMP_FOLDER, upload.clone());
    exports.set(UPLOAD_FOLDER, upload);
    exports.set(SSL_CERT_PATH, path_value(&layout.certificate_path)?);
    if let Some(command) = tesseract_cmd {
        exports.set(TESSERACT_CMD, command);
    }
    Ok(exports)
}

fn path_value(path: &Path) -> Result<String, AppError> {
    path.to_str().map(str::to_string).ok_or_else(|| {
        AppError::config_error(format!("Path contains invalid unicode: {}", path.display()))
    })
}
