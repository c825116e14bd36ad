//! Step 5: OCR and PDF capability verification.

use std::time::Duration;

use crate::app::{AppContext, output};
use crate::domain::{CapabilityKind, CapabilityProbe, CapabilityReport, StepKind, StepStatus};
use crate::ports::{CertificateSource, CommandRunner};

const TESSERACT: &str = "tesseract";

/// Probe every capability and emit one diagnostic line each. Never fails.
///
/// `tesseract_override` is the value of `TESSERACT_CMD`, tried before configured candidates.
pub fn execute<R: CommandRunner, C: CertificateSource>(
    ctx: &AppContext<R, C>,
    tesseract_override: Option<&str>,
) -> (StepStatus, CapabilityReport) {
    let report = probe(ctx, tesseract_override);
    for probe in &report.probes {
        output::capability(probe);
    }

    let missing: Vec<&str> = report.missing().map(|probe| probe.name.as_str()).collect();
    let status = if missing.is_empty() {
        StepStatus::Completed
    } else {
        let message = format!("missing: {}", missing.join(", "));
        output::warn(StepKind::Capabilities, &message);
        StepStatus::Degraded(message)
    };
    (status, report)
}

pub fn probe<R: CommandRunner, C: CertificateSource>(
    ctx: &AppContext<R, C>,
    tesseract_override: Option<&str>,
) -> CapabilityReport {
    let config = ctx.config();
    let runner = ctx.runner();
    let timeout = Duration::from_secs(config.capabilities.timeout_secs);
    let mut report = CapabilityReport::default();

    let candidates: Vec<&str> = tesseract_override
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .into_iter()
        .chain(config.capabilities.tesseract_candidates.iter().map(String::as_str))
        .collect();
    let mut tried = Vec::new();
    let mut found = None;
    for candidate in &candidates {
        match probe_binary(runner, candidate, "--version", timeout) {
            Ok(version) => {
                found = Some((candidate.to_string(), version));
                break;
            }
            Err(reason) => tried.push(format!("{}: {}", candidate, reason)),
        }
    }
    match found {
        Some((command, version)) => {
            report.probes.push(CapabilityProbe::available(
                TESSERACT,
                CapabilityKind::Binary,
                format!("{} ({})", version, command),
            ));
            report.tesseract_cmd = Some(command);
        }
        None => report.probes.push(CapabilityProbe::missing(
            TESSERACT,
            CapabilityKind::Binary,
            format!("not found (tried {})", tried.join("; ")),
        )),
    }

    let pdf_binary = config.capabilities.pdf_binary.as_str();
    report.probes.push(match probe_binary(runner, pdf_binary, "-v", timeout) {
        Ok(version) => CapabilityProbe::available(pdf_binary, CapabilityKind::Binary, version),
        Err(reason) => CapabilityProbe::missing(pdf_binary, CapabilityKind::Binary, reason),
    });

    for module in &config.capabilities.python_modules {
        let statement = format!("import {}", module);
        let probe = match runner.run_with_timeout(&config.python, &["-c", &statement], timeout) {
            Ok(result) if result.success => {
                CapabilityProbe::available(module, CapabilityKind::PythonModule, "importable")
            }
            Ok(result) => CapabilityProbe::missing(
                module,
                CapabilityKind::PythonModule,
                last_line(&result.stderr).unwrap_or("import failed").to_string(),
            ),
            Err(err) => {
                CapabilityProbe::missing(module, CapabilityKind::PythonModule, err.to_string())
            }
        };
        report.probes.push(probe);
    }

    report
}

fn probe_binary<R: CommandRunner>(
    runner: &R,
    program: &str,
    flag: &str,
    timeout: Duration,
) -> Result<String, String> {
    match runner.run_with_timeout(program, &[flag], timeout) {
        Ok(result) if result.success => {
            let line = result.first_line();
            Ok(if line.is_empty() { "available".to_string() } else { line.to_string() })
        }
        Ok(result) => Err(result.failure_summary()),
        Err(err) => Err(err.to_string()),
    }
}

fn last_line(text: &str) -> Option<&str> {
    text.lines().rev().map(str::trim).find(|line| !line.is_empty())
}
