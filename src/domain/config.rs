//! Bootstrap configuration (`appboot.toml`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, PrivilegeTier};

pub const CONFIG_FILE_NAME: &str = "appboot.toml";
pub const DEFAULT_CERTIFICATE_URL: &str =
    "https://www.digicert.com/CACerts/BaltimoreCyberTrustRoot.crt.pem";
pub const DEFAULT_CERTIFICATE_FILE: &str = "BaltimoreCyberTrustRoot.crt.pem";

/// Full bootstrap configuration. Every table is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Privilege tier; CLI flag and `APPBOOT_TIER` take precedence.
    #[serde(default)]
    pub tier: Option<PrivilegeTier>,
    /// Application directory; defaults to the working directory.
    #[serde(default)]
    pub app_dir: Option<PathBuf>,
    /// Python interpreter used for pip, import probes and the server.
    #[serde(default = "default_python")]
    pub python: String,
    #[serde(default)]
    pub packages: PackagesConfig,
    #[serde(default)]
    pub directories: DirectoriesConfig,
    #[serde(default)]
    pub certificate: CertificateConfig,
    #[serde(default)]
    pub dependencies: DependenciesConfig,
    #[serde(default)]
    pub capabilities: CapabilitiesConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            tier: None,
            app_dir: None,
            python: default_python(),
            packages: PackagesConfig::default(),
            directories: DirectoriesConfig::default(),
            certificate: CertificateConfig::default(),
            dependencies: DependenciesConfig::default(),
            capabilities: CapabilitiesConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

/// OS package installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackagesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Abort the sequence when the package manager fails.
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_package_manager")]
    pub manager: String,
    #[serde(default = "default_package_names")]
    pub names: Vec<String>,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strict: false,
            manager: default_package_manager(),
            names: default_package_names(),
        }
    }
}

/// Directory overrides. Unset fields fall back to the tier layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoriesConfig {
    #[serde(default)]
    pub upload: Option<PathBuf>,
    #[serde(default)]
    pub ssl: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CertificateConfig {
    #[serde(default = "default_certificate_url")]
    pub url: Url,
    #[serde(default = "default_certificate_file")]
    pub file_name: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Expected SHA-256 of the certificate, lowercase hex.
    #[serde(default)]
    pub sha256: Option<String>,
}

impl Default for CertificateConfig {
    fn default() -> Self {
        Self {
            url: default_certificate_url(),
            file_name: default_certificate_file(),
            timeout_secs: default_timeout(),
            sha256: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependenciesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Requirements file, relative to the application directory.
    #[serde(default = "default_requirements")]
    pub requirements: PathBuf,
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        Self { enabled: true, requirements: default_requirements() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapabilitiesConfig {
    #[serde(default = "default_tesseract_candidates")]
    pub tesseract_candidates: Vec<String>,
    #[serde(default = "default_pdf_binary")]
    pub pdf_binary: String,
    #[serde(default = "default_python_modules")]
    pub python_modules: Vec<String>,
    /// Per-probe limit; a probe still running after it counts as missing.
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
}

impl Default for CapabilitiesConfig {
    fn default() -> Self {
        Self {
            tesseract_candidates: default_tesseract_candidates(),
            pdf_binary: default_pdf_binary(),
            python_modules: default_python_modules(),
            timeout_secs: default_probe_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Python module providing the ASGI server (`python -m <module>`).
    #[serde(default = "default_server_module")]
    pub module: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Attribute name of the ASGI callable inside the entry module.
    #[serde(default = "default_app_object")]
    pub app_object: String,
    /// Module used when no entry point file is found. Empty disables the fallback.
    #[serde(default = "default_fallback_module")]
    pub fallback_module: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            module: default_server_module(),
            host: default_host(),
            port: default_port(),
            app_object: default_app_object(),
            fallback_module: default_fallback_module(),
        }
    }
}

impl BootstrapConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.python.trim().is_empty() {
            return Err(AppError::InvalidConfig("python must not be empty".into()));
        }
        if self.packages.enabled && self.packages.manager.trim().is_empty() {
            return Err(AppError::InvalidConfig("packages.manager must not be empty".into()));
        }
        let file_name = &self.certificate.file_name;
        if file_name.is_empty() || file_name.contains('/') || file_name.contains('\\') {
            return Err(AppError::InvalidConfig(format!(
                "certificate.file_name must be a bare file name, got '{}'",
                file_name
            )));
        }
        if self.certificate.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "certificate.timeout_secs must be greater than 0".into(),
            ));
        }
        if let Some(digest) = &self.certificate.sha256
            && (digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()))
        {
            return Err(AppError::InvalidConfig(
                "certificate.sha256 must be 64 hexadecimal characters".into(),
            ));
        }
        if self.capabilities.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "capabilities.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.server.module.trim().is_empty() {
            return Err(AppError::InvalidConfig("server.module must not be empty".into()));
        }
        if self.server.host.trim().is_empty() {
            return Err(AppError::InvalidConfig("server.host must not be empty".into()));
        }
        if self.server.port == 0 {
            return Err(AppError::InvalidConfig("server.port must be greater than 0".into()));
        }
        if self.server.app_object.trim().is_empty() {
            return Err(AppError::InvalidConfig("server.app_object must not be empty".into()));
        }
        Ok(())
    }

    /// Fallback entry module, or `None` when disabled.
    pub fn fallback_module(&self) -> Option<&str> {
        let value = self.server.fallback_module.trim();
        if value.is_empty() { None } else { Some(value) }
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BootstrapConfig, AppError> {
    let config: BootstrapConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn default_true() -> bool {
    true
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_package_manager() -> String {
    "apt-get".to_string()
}

fn default_package_names() -> Vec<String> {
    [
        "tesseract-ocr",
        "tesseract-ocr-jpn",
        "tesseract-ocr-eng",
        "poppler-utils",
        "ghostscript",
        "libgl1",
        "libglib2.0-0",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_certificate_url() -> Url {
    Url::parse(DEFAULT_CERTIFICATE_URL).expect("default certificate URL is valid")
}

fn default_certificate_file() -> String {
    DEFAULT_CERTIFICATE_FILE.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_requirements() -> PathBuf {
    PathBuf::from("requirements.txt")
}

fn default_tesseract_candidates() -> Vec<String> {
    ["/usr/bin/tesseract", "/usr/local/bin/tesseract", "tesseract"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_pdf_binary() -> String {
    "pdftoppm".to_string()
}

fn default_python_modules() -> Vec<String> {
    ["pytesseract", "pdf2image", "PIL", "camelot"].into_iter().map(String::from).collect()
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_server_module() -> String {
    "uvicorn".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_app_object() -> String {
    "app".to_string()
}

fn default_fallback_module() -> String {
    "app.main".to_string()
}
