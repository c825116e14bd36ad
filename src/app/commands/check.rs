//! Capability and entry point check without provisioning.

use serde::Serialize;

use crate::app::commands::{capabilities, entry_point};
use crate::app::{AppContext, output};
use crate::domain::{CapabilityReport, EntryLocation, EntryPoint, StepKind};
use crate::ports::{CertificateSource, CommandRunner};

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub capabilities: CapabilityReport,
    pub entry_point: Option<EntryPoint>,
    pub exit_code: i32,
}

/// Run steps 5 and 6 only.
///
/// Fails (exit code 1) when a capability is missing or no entry point resolves. With
/// `strict`, resolving to the fallback module also fails. With `quiet`, nothing is
/// printed, so the caller can render the outcome itself.
pub fn execute<R: CommandRunner, C: CertificateSource>(
    ctx: &AppContext<R, C>,
    tesseract_override: Option<&str>,
    strict: bool,
    quiet: bool,
) -> CheckOutcome {
    let app_dir = &ctx.layout().app_dir;
    let (capabilities, entry_point) = if quiet {
        let capabilities = capabilities::probe(ctx, tesseract_override);
        (capabilities, entry_point::discover(app_dir, ctx.config()).ok())
    } else {
        let (_, capabilities) = capabilities::execute(ctx, tesseract_override);
        let entry_point = match entry_point::execute(app_dir, ctx.config()) {
            Ok((_, entry)) => Some(entry),
            Err(err) => {
                output::warn(StepKind::EntryPoint, err);
                None
            }
        };
        (capabilities, entry_point)
    };

    let entry_ok = match &entry_point {
        Some(entry) => !(strict && entry.location == EntryLocation::Fallback),
        None => false,
    };
    let exit_code = if capabilities.all_available() && entry_ok { 0 } else { 1 };

    CheckOutcome { capabilities, entry_point, exit_code }
}
