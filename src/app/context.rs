use crate::domain::{BootstrapConfig, ResolvedLayout};
use crate::ports::{CertificateSource, CommandRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner, C: CertificateSource> {
    runner: R,
    certificates: C,
    config: BootstrapConfig,
    layout: ResolvedLayout,
}

impl<R: CommandRunner, C: CertificateSource> AppContext<R, C> {
    pub fn new(
        runner: R,
        certificates: C,
        config: BootstrapConfig,
        layout: ResolvedLayout,
    ) -> Self {
        Self { runner, certificates, config, layout }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn certificates(&self) -> &C {
        &self.certificates
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }
}
