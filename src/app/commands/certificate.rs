//! Step 3: conditional root certificate fetch.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::app::{AppContext, output};
use crate::domain::{StepKind, StepStatus};
use crate::ports::{CertificateSource, CommandRunner};

const STEP: StepKind = StepKind::Certificate;

/// Download the certificate unless it is already present. Never fails the sequence.
pub fn execute<R: CommandRunner, C: CertificateSource>(ctx: &AppContext<R, C>) -> StepStatus {
    let path = &ctx.layout().certificate_path;
    let settings = &ctx.config().certificate;

    if path.is_file() {
        return StepStatus::Skipped(format!("{} already present", path.display()));
    }

    output::info(STEP, format!("downloading {}", settings.url));
    let body = match ctx.certificates().fetch(&settings.url) {
        Ok(body) => body,
        Err(err) => return degraded(err.to_string()),
    };

    let fingerprint = sha256_hex(&body);
    if let Some(expected) = &settings.sha256
        && !expected.eq_ignore_ascii_case(&fingerprint)
    {
        return degraded(format!(
            "certificate digest mismatch: expected {}, got {}",
            expected.to_ascii_lowercase(),
            fingerprint
        ));
    }

    if let Err(err) = store(path, &body) {
        return degraded(format!("cannot write {}: {}", path.display(), err));
    }

    output::info(STEP, format!("sha256={}", fingerprint));
    StepStatus::Completed
}

pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

fn degraded(message: String) -> StepStatus {
    output::warn(STEP, &message);
    StepStatus::Degraded(message)
}

fn store(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let partial = path.with_file_name(format!(
        ".{}.part",
        path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default()
    ));
    fs::write(&partial, body)?;
    set_readable(&partial)?;
    fs::rename(&partial, path).inspect_err(|_| {
        let _ = fs::remove_file(&partial);
    })
}

#[cfg(unix)]
fn set_readable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
