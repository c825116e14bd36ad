//! Step 2: upload and certificate directory provisioning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::{AppContext, output};
use crate::domain::{ResolvedLayout, StepKind, StepStatus};
use crate::ports::{CertificateSource, CommandRunner};

const STEP: StepKind = StepKind::Directories;
const PROBE_FILE: &str = ".appboot-write-probe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedDirectories {
    pub status: StepStatus,
    /// Folder exported as `UPLOAD_FOLDER` and `OCR_TEMP_FOLDER`.
    pub upload_folder: PathBuf,
}

/// Create the upload and SSL directories, suppressing every failure.
pub fn execute<R: CommandRunner, C: CertificateSource>(
    ctx: &AppContext<R, C>,
) -> ProvisionedDirectories {
    provision(ctx.layout())
}

pub fn provision(layout: &ResolvedLayout) -> ProvisionedDirectories {
    let mut failures = Vec::new();

    for dir in [&layout.upload_dir, &layout.ssl_dir] {
        match fs::create_dir_all(dir) {
            Ok(()) => output::info(STEP, format!("ensured {}", dir.display())),
            Err(err) => {
                let message = format!("cannot create {}: {}", dir.display(), err);
                output::warn(STEP, &message);
                failures.push(message);
            }
        }
    }

    let upload_folder = match select_writable(&layout.upload_candidates()) {
        Some(folder) => folder,
        None => {
            let fallback = std::env::temp_dir();
            let message =
                format!("no writable upload folder found, using {}", fallback.display());
            output::warn(STEP, &message);
            failures.push(message);
            fallback
        }
    };
    if upload_folder != layout.upload_dir {
        output::warn(STEP, format!("upload folder falls back to {}", upload_folder.display()));
    }

    let status = if failures.is_empty() {
        StepStatus::Completed
    } else {
        StepStatus::Degraded(failures.join("; "))
    };
    ProvisionedDirectories { status, upload_folder }
}

/// First existing candidate that accepts a probe write.
pub fn select_writable(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|dir| is_writable(dir)).cloned()
}

fn is_writable(dir: &Path) -> bool {
    if !dir.is_dir() {
        return false;
    }
    let probe = dir.join(format!("{}-{}", PROBE_FILE, std::process::id()));
    if fs::write(&probe, b"probe").is_err() {
        return false;
    }
    let _ = fs::remove_file(&probe);
    true
}
