//! Console output for bootstrap progress.
//!
//! Progress goes to stdout, warnings and diagnostics to stderr. Every line carries a
//! local timestamp so container logs stay ordered against the server's own output.

use std::fmt::Display;

use chrono::Local;

use crate::domain::{BootstrapReport, CapabilityProbe, CapabilityReport, StepKind};

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn tag(step: StepKind) -> String {
    format!("[{}/{} {}]", step.position(), StepKind::ALL.len(), step.label())
}

pub fn step_started(step: StepKind) {
    println!("{} [INFO] {} starting", timestamp(), tag(step));
}

pub fn step_done(step: StepKind, message: impl Display) {
    println!("{} [INFO] {} ✅ {}", timestamp(), tag(step), message);
}

pub fn step_skipped(step: StepKind, reason: impl Display) {
    println!("{} [INFO] {} skipped: {}", timestamp(), tag(step), reason);
}

pub fn info(step: StepKind, message: impl Display) {
    println!("{} [INFO] {} {}", timestamp(), tag(step), message);
}

pub fn warn(step: StepKind, message: impl Display) {
    eprintln!("{} [WARN] {} ⚠️  {}", timestamp(), tag(step), message);
}

pub fn capability(probe: &CapabilityProbe) {
    if probe.available {
        println!("{} [INFO] ✅ {}: {}", timestamp(), probe.name, probe.detail);
    } else {
        eprintln!("{} [WARN] ❌ {}: {}", timestamp(), probe.name, probe.detail);
    }
}

/// Outcome of steps 1-7, printed just before the handoff.
pub fn summary(report: &BootstrapReport, capabilities: &CapabilityReport) {
    println!(
        "{} [INFO] bootstrap: {}; {} capability check(s) missing",
        timestamp(),
        report.summary(),
        capabilities.missing().count()
    );
}
