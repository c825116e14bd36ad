//! API Facade for the application.
//!
//! Resolves configuration, tier and layout, builds the `AppContext` with the real
//! adapters, and runs commands.

use std::path::PathBuf;

use crate::adapters::{HttpCertificateSource, ProcessCommandRunner, load_config};
use crate::app::{AppContext, output};
use crate::app::commands::{check, handoff, plan, sequence};
use crate::domain::{AppError, BootstrapConfig, PrivilegeTier, ResolvedLayout};

pub use crate::app::commands::check::CheckOutcome;
pub use crate::app::commands::plan::{PlanOutput, PlannedStep};
pub use crate::app::commands::sequence::{InheritedEnv, SequenceOutcome};
pub use crate::domain::EnvExports;

/// Caller-supplied overrides. Unset fields fall back to the config file, then defaults.
#[derive(Debug, Clone, Default)]
pub struct BootstrapOptions {
    pub config_path: Option<PathBuf>,
    pub tier: Option<PrivilegeTier>,
    pub app_dir: Option<PathBuf>,
}

/// Resolved configuration and layout.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: BootstrapConfig,
    pub layout: ResolvedLayout,
}

/// Load configuration and resolve the tier-dependent layout.
pub fn resolve(options: &BootstrapOptions) -> Result<Settings, AppError> {
    let lookup_dir = match &options.app_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let config = load_config(options.config_path.as_deref(), &lookup_dir)?;

    let app_dir = match (&options.app_dir, &config.app_dir) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) if dir.is_absolute() => dir.clone(),
        (None, Some(dir)) => lookup_dir.join(dir),
        (None, None) => lookup_dir,
    };
    let tier = options.tier.or(config.tier).unwrap_or_default();
    let layout = ResolvedLayout::resolve(tier, &app_dir, &config);

    Ok(Settings { config, layout })
}

fn create_context(
    settings: Settings,
) -> Result<AppContext<ProcessCommandRunner, HttpCertificateSource>, AppError> {
    let certificates = HttpCertificateSource::new(settings.config.certificate.timeout_secs)?;
    Ok(AppContext::new(ProcessCommandRunner::new(), certificates, settings.config, settings.layout))
}

/// Run the full sequence and hand the process over to the server.
///
/// On Unix this only returns on failure. Elsewhere it returns the server's exit code.
pub fn run(options: &BootstrapOptions) -> Result<i32, AppError> {
    let ctx = create_context(resolve(options)?)?;
    let outcome = sequence::execute(&ctx, &InheritedEnv::from_process())?;
    output::summary(&outcome.report, &outcome.capabilities);
    handoff::execute(ctx.runner(), &outcome.plan)
}

/// Probe capabilities and the entry point without provisioning.
pub fn check(
    options: &BootstrapOptions,
    strict: bool,
    quiet: bool,
) -> Result<CheckOutcome, AppError> {
    let ctx = create_context(resolve(options)?)?;
    let tesseract = std::env::var("TESSERACT_CMD").ok();
    Ok(check::execute(&ctx, tesseract.as_deref(), strict, quiet))
}

/// Resolve what `run` would do, without side effects.
pub fn plan(options: &BootstrapOptions) -> Result<PlanOutput, AppError> {
    let ctx = create_context(resolve(options)?)?;
    plan::execute(&ctx, std::env::var_os("PYTHONPATH").as_ref())
}

/// Exports `run` would set, using the configured upload folder.
pub fn env(options: &BootstrapOptions) -> Result<EnvExports, AppError> {
    let settings = resolve(options)?;
    plan::exports(&settings.layout, std::env::var_os("PYTHONPATH").as_ref())
}
