use std::path::Path;

use crate::app::AppContext;
use crate::domain::{BootstrapConfig, PrivilegeTier, ResolvedLayout};
use crate::testing::{FakeCertificateSource, FakeCommandRunner};

pub const TEST_PEM: &str = concat!(
    "-----BEGIN CERTIFICATE-----\n",
    "MIIDdzCCAl+gAwIBAgIEAgAAuTANBgkq\n",
    "-----END CERTIFICATE-----\n"
);

pub type FakeContext = AppContext<FakeCommandRunner, FakeCertificateSource>;

/// Configuration whose directories all live under `root`.
pub fn sandboxed_config(root: &Path) -> BootstrapConfig {
    let mut config = BootstrapConfig::default();
    config.directories.upload = Some(root.join("uploads"));
    config.directories.ssl = Some(root.join("ssl"));
    config
}

pub fn fake_context(
    app_dir: &Path,
    tier: PrivilegeTier,
    config: BootstrapConfig,
    certificates: FakeCertificateSource,
) -> FakeContext {
    let layout = ResolvedLayout::resolve(tier, app_dir, &config);
    AppContext::new(FakeCommandRunner::new(), certificates, config, layout)
}

/// Sandboxed context serving a test certificate.
pub fn sandboxed_context(app_dir: &Path, tier: PrivilegeTier) -> FakeContext {
    fake_context(app_dir, tier, sandboxed_config(app_dir), FakeCertificateSource::serving(TEST_PEM))
}
