use std::io;

use thiserror::Error;

/// Library-wide error type for appboot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file was parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file given explicitly does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Privilege tier name is not recognized.
    #[error("Invalid privilege tier '{0}': must be one of system, constrained")]
    InvalidTier(String),

    /// External tool could not be spawned or exited unsuccessfully.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// OS package installation failed with `packages.strict` enabled.
    #[error("Package installation failed: {0}")]
    PackageInstall(String),

    /// Python dependency installation failed.
    #[error("Dependency installation failed: {0}")]
    DependencyInstall(String),

    /// Certificate download failed.
    #[error("Certificate fetch from {url} failed: {details}")]
    CertificateFetch { url: String, details: String },

    /// No entry point file was found and no fallback module is configured.
    #[error("No application entry point found under {0} and no fallback module configured")]
    EntryPointNotFound(String),

    /// The server process could not be launched.
    #[error("Failed to launch server '{program}': {details}")]
    Handoff { program: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn tool_error(tool: impl Into<String>, error: impl Into<String>) -> Self {
        AppError::ExternalToolError { tool: tool.into(), error: error.into() }
    }
}
