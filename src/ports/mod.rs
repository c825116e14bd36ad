mod certificate_source;
mod command_runner;

pub use certificate_source::CertificateSource;
pub use command_runner::{CommandOutput, CommandRunner};
