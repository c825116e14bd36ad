//! Step model for the bootstrap sequence.

use std::fmt;

use serde::Serialize;

/// How a step's failure affects the rest of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Log and continue.
    BestEffort,
    /// Abort before the handoff.
    Fatal,
    /// Report only.
    Diagnostic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Packages,
    Directories,
    Certificate,
    Dependencies,
    Capabilities,
    EntryPoint,
    Environment,
    Handoff,
}

impl StepKind {
    pub const ALL: [StepKind; 8] = [
        StepKind::Packages,
        StepKind::Directories,
        StepKind::Certificate,
        StepKind::Dependencies,
        StepKind::Capabilities,
        StepKind::EntryPoint,
        StepKind::Environment,
        StepKind::Handoff,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StepKind::Packages => "packages",
            StepKind::Directories => "directories",
            StepKind::Certificate => "certificate",
            StepKind::Dependencies => "dependencies",
            StepKind::Capabilities => "capabilities",
            StepKind::EntryPoint => "entry-point",
            StepKind::Environment => "environment",
            StepKind::Handoff => "handoff",
        }
    }

    pub fn policy(self) -> FailurePolicy {
        match self {
            StepKind::Packages | StepKind::Directories | StepKind::Certificate => {
                FailurePolicy::BestEffort
            }
            StepKind::Capabilities | StepKind::EntryPoint => FailurePolicy::Diagnostic,
            StepKind::Dependencies | StepKind::Environment | StepKind::Handoff => {
                FailurePolicy::Fatal
            }
        }
    }

    /// 1-based position in the sequence.
    pub fn position(self) -> usize {
        StepKind::ALL.iter().position(|step| *step == self).map_or(0, |index| index + 1)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "kebab-case")]
pub enum StepStatus {
    Completed,
    Skipped(String),
    /// Finished with suppressed failures.
    Degraded(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: StepKind,
    #[serde(flatten)]
    pub status: StepStatus,
}

/// Ordered record of what the sequence did.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BootstrapReport {
    records: Vec<StepRecord>,
}

impl BootstrapReport {
    pub fn record(&mut self, step: StepKind, status: StepStatus) {
        self.records.push(StepRecord { step, status });
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn status_of(&self, step: StepKind) -> Option<&StepStatus> {
        self.records.iter().find(|record| record.step == step).map(|record| &record.status)
    }

    /// One-line tally, naming the degraded steps.
    pub fn summary(&self) -> String {
        let degraded: Vec<&str> = self
            .records
            .iter()
            .filter(|record| matches!(record.status, StepStatus::Degraded(_)))
            .map(|record| record.step.label())
            .collect();
        let skipped = self
            .records
            .iter()
            .filter(|record| matches!(record.status, StepStatus::Skipped(_)))
            .count();

        let mut line = format!(
            "{} steps run, {} skipped, {} degraded",
            self.records.len(),
            skipped,
            degraded.len()
        );
        if !degraded.is_empty() {
            line.push_str(&format!(" ({})", degraded.join(", ")));
        }
        line
    }
}
