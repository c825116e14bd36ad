pub mod certificate_http;
pub mod config_file;
pub mod process_command;

pub use certificate_http::HttpCertificateSource;
pub use config_file::load_config;
pub use process_command::ProcessCommandRunner;
