//! The bootstrap sequence, steps 1 through 7.
//!
//! Fatal failures return `Err` before a `LaunchPlan` exists, so the handoff can only
//! happen after every fatal step has succeeded.

use std::ffi::OsString;

use crate::app::commands::{
    capabilities, certificate, dependencies, directories, entry_point, environment, packages,
};
use crate::app::{AppContext, output};
use crate::domain::{
    AppError, BootstrapReport, CapabilityReport, LaunchPlan, StepKind, StepStatus,
};
use crate::ports::{CertificateSource, CommandRunner};

/// Process environment the sequence reads.
#[derive(Debug, Clone, Default)]
pub struct InheritedEnv {
    pub tesseract_cmd: Option<String>,
    pub python_path: Option<OsString>,
}

impl InheritedEnv {
    pub fn from_process() -> Self {
        Self {
            tesseract_cmd: std::env::var("TESSERACT_CMD").ok(),
            python_path: std::env::var_os("PYTHONPATH"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SequenceOutcome {
    pub report: BootstrapReport,
    pub capabilities: CapabilityReport,
    pub plan: LaunchPlan,
}

pub fn execute<R: CommandRunner, C: CertificateSource>(
    ctx: &AppContext<R, C>,
    inherited: &InheritedEnv,
) -> Result<SequenceOutcome, AppError> {
    let mut report = BootstrapReport::default();
    let layout = ctx.layout();
    let config = ctx.config();
    output::info(
        StepKind::Packages,
        format!("tier={} app_dir={}", layout.tier, layout.app_dir.display()),
    );

    output::step_started(StepKind::Packages);
    let status = packages::execute(ctx)?;
    finish(&mut report, StepKind::Packages, status);

    output::step_started(StepKind::Directories);
    let dirs = directories::execute(ctx);
    finish(&mut report, StepKind::Directories, dirs.status.clone());

    output::step_started(StepKind::Certificate);
    let status = certificate::execute(ctx);
    finish(&mut report, StepKind::Certificate, status);

    output::step_started(StepKind::Dependencies);
    let status = dependencies::execute(ctx)?;
    finish(&mut report, StepKind::Dependencies, status);

    output::step_started(StepKind::Capabilities);
    let (status, capabilities) = capabilities::execute(ctx, inherited.tesseract_cmd.as_deref());
    finish(&mut report, StepKind::Capabilities, status);

    output::step_started(StepKind::EntryPoint);
    let (status, entry) = entry_point::execute(&layout.app_dir, config)?;
    finish(&mut report, StepKind::EntryPoint, status);

    output::step_started(StepKind::Environment);
    let env = environment::build(
        layout,
        &dirs.upload_folder,
        capabilities.tesseract_cmd.as_deref(),
        inherited.python_path.as_ref(),
    )?;
    for (name, value) in env.iter() {
        output::info(StepKind::Environment, format!("{}={}", name, value));
    }
    finish(&mut report, StepKind::Environment, StepStatus::Completed);

    let plan = LaunchPlan::asgi(config, &entry, layout.app_dir.clone(), env);
    Ok(SequenceOutcome { report, capabilities, plan })
}

fn finish(report: &mut BootstrapReport, step: StepKind, status: StepStatus) {
    match &status {
        StepStatus::Completed => output::step_done(step, "done"),
        StepStatus::Skipped(reason) => output::step_skipped(step, reason),
        StepStatus::Degraded(_) => output::step_done(step, "done with warnings"),
    }
    report.record(step, status);
}
