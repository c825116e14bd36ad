//! Tier-dependent filesystem layout.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{BootstrapConfig, PrivilegeTier};

pub const SYSTEM_UPLOAD_DIR: &str = "/tmp/po_uploads";
pub const SYSTEM_SSL_DIR: &str = "/opt/ssl";
pub const CONSTRAINED_UPLOAD_DIR: &str = "temp";
pub const CONSTRAINED_SSL_DIR: &str = "ssl";

/// Concrete paths the sequence works with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLayout {
    pub tier: PrivilegeTier,
    pub app_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub ssl_dir: PathBuf,
    pub certificate_path: PathBuf,
    pub requirements_path: PathBuf,
}

impl ResolvedLayout {
    pub fn resolve(tier: PrivilegeTier, app_dir: &Path, config: &BootstrapConfig) -> Self {
        let upload_dir = config
            .directories
            .upload
            .as_deref()
            .map(|path| absolutize(app_dir, path))
            .unwrap_or_else(|| default_upload_dir(tier, app_dir));
        let ssl_dir = config
            .directories
            .ssl
            .as_deref()
            .map(|path| absolutize(app_dir, path))
            .unwrap_or_else(|| default_ssl_dir(tier, app_dir));
        let certificate_path = ssl_dir.join(&config.certificate.file_name);
        let requirements_path = absolutize(app_dir, &config.dependencies.requirements);

        Self {
            tier,
            app_dir: app_dir.to_path_buf(),
            upload_dir,
            ssl_dir,
            certificate_path,
            requirements_path,
        }
    }

    /// Candidate upload folders in preference order, deduplicated.
    ///
    /// The configured folder comes first, then the other tier's default, then the OS temp dir.
    pub fn upload_candidates(&self) -> Vec<PathBuf> {
        let other_tier = match self.tier {
            PrivilegeTier::System => PrivilegeTier::Constrained,
            PrivilegeTier::Constrained => PrivilegeTier::System,
        };
        let mut candidates = vec![
            self.upload_dir.clone(),
            default_upload_dir(other_tier, &self.app_dir),
            std::env::temp_dir(),
        ];
        let mut seen = Vec::new();
        candidates.retain(|path| {
            if seen.contains(path) {
                false
            } else {
                seen.push(path.clone());
                true
            }
        });
        candidates
    }
}

pub fn default_upload_dir(tier: PrivilegeTier, app_dir: &Path) -> PathBuf {
    match tier {
        PrivilegeTier::System => PathBuf::from(SYSTEM_UPLOAD_DIR),
        PrivilegeTier::Constrained => app_dir.join(CONSTRAINED_UPLOAD_DIR),
    }
}

pub fn default_ssl_dir(tier: PrivilegeTier, app_dir: &Path) -> PathBuf {
    match tier {
        PrivilegeTier::System => PathBuf::from(SYSTEM_SSL_DIR),
        PrivilegeTier::Constrained => app_dir.join(CONSTRAINED_SSL_DIR),
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
