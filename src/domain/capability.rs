use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityKind {
    Binary,
    PythonModule,
}

/// Outcome of probing one OCR/PDF capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityProbe {
    pub name: String,
    pub kind: CapabilityKind,
    pub available: bool,
    /// Version line, resolved path, or failure reason.
    pub detail: String,
}

impl CapabilityProbe {
    pub fn available(
        name: impl Into<String>,
        kind: CapabilityKind,
        detail: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), kind, available: true, detail: detail.into() }
    }

    pub fn missing(
        name: impl Into<String>,
        kind: CapabilityKind,
        detail: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), kind, available: false, detail: detail.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CapabilityReport {
    pub probes: Vec<CapabilityProbe>,
    /// Resolved tesseract command, exported as `TESSERACT_CMD`.
    pub tesseract_cmd: Option<String>,
}

impl CapabilityReport {
    pub fn missing(&self) -> impl Iterator<Item = &CapabilityProbe> {
        self.probes.iter().filter(|probe| !probe.available)
    }

    pub fn all_available(&self) -> bool {
        self.probes.iter().all(|probe| probe.available)
    }
}
