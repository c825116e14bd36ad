mod context;
mod fake_certificate_source;
mod fake_command_runner;

#[allow(unused_imports)]
pub use context::{FakeContext, TEST_PEM, fake_context, sandboxed_config, sandboxed_context};
pub use fake_certificate_source::FakeCertificateSource;
pub use fake_command_runner::FakeCommandRunner;
