//! Dry resolution of the sequence: no commands, no network, no filesystem writes.

use std::ffi::OsString;

use serde::Serialize;

use crate::app::AppContext;
use crate::app::commands::{entry_point, environment};
use crate::domain::{
    AppError, EntryPoint, EnvExports, FailurePolicy, LaunchPlan, ResolvedLayout, StepKind,
};
use crate::ports::{CertificateSource, CommandRunner};

#[derive(Debug, Clone, Serialize)]
pub struct PlannedStep {
    pub step: StepKind,
    pub policy: FailurePolicy,
    pub action: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanOutput {
    pub layout: ResolvedLayout,
    pub entry_point: EntryPoint,
    pub steps: Vec<PlannedStep>,
    pub command: String,
    pub env: EnvExports,
}

pub fn execute<R: CommandRunner, C: CertificateSource>(
    ctx: &AppContext<R, C>,
    python_path: Option<&OsString>,
) -> Result<PlanOutput, AppError> {
    let layout = ctx.layout();
    let config = ctx.config();

    let entry = entry_point::discover(&layout.app_dir, config)?;
    let env = exports(layout, python_path)?;
    let launch = LaunchPlan::asgi(config, &entry, layout.app_dir.clone(), env.clone());

    let packages = &config.packages;
    let python = &config.python;
    let steps = StepKind::ALL
        .into_iter()
        .map(|step| {
            let action = match step {
                StepKind::Packages if !packages.enabled => "skip (disabled)".to_string(),
                StepKind::Packages if !layout.tier.can_install_packages() => {
                    format!("skip ({} tier)", layout.tier)
                }
                StepKind::Packages => format!(
                    "{m} update && {m} install -y {}",
                    packages.names.join(" "),
                    m = packages.manager
                ),
                StepKind::Directories => format!(
                    "mkdir -p {} {}",
                    layout.upload_dir.display(),
                    layout.ssl_dir.display()
                ),
                StepKind::Certificate if layout.certificate_path.is_file() => {
                    format!("keep {}", layout.certificate_path.display())
                }
                StepKind::Certificate => format!(
                    "download {} -> {}",
                    config.certificate.url,
                    layout.certificate_path.display()
                ),
                StepKind::Dependencies if !config.dependencies.enabled => {
                    "skip (disabled)".to_string()
                }
                StepKind::Dependencies => format!(
                    "{p} -m pip install --upgrade pip && {p} -m pip install -r {}",
                    layout.requirements_path.display(),
                    p = python
                ),
                StepKind::Capabilities => format!(
                    "probe tesseract, {}, python modules: {}",
                    config.capabilities.pdf_binary,
                    config.capabilities.python_modules.join(", ")
                ),
                StepKind::EntryPoint => format!("module {}", entry.module),
                StepKind::Environment => {
                    env.iter().map(|(name, _)| name).collect::<Vec<_>>().join(", ")
                }
                StepKind::Handoff => launch.command_line(),
            };
            PlannedStep { step, policy: step.policy(), action }
        })
        .collect();

    Ok(PlanOutput {
        layout: layout.clone(),
        entry_point: entry,
        steps,
        command: launch.command_line(),
        env,
    })
}

/// Exports as they would be without probing: configured upload folder, no `TESSERACT_CMD`.
pub fn exports(
    layout: &ResolvedLayout,
    python_path: Option<&OsString>,
) -> Result<EnvExports, AppError> {
    environment::build(layout, &layout.upload_dir, None, python_path)
}
