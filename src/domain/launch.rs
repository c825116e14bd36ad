use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{BootstrapConfig, EntryPoint, EnvExports};

/// Command the process hands over to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub env: EnvExports,
}

impl LaunchPlan {
    /// `<python> -m <server> <module>:<object> --host <host> --port <port>`
    pub fn asgi(
        config: &BootstrapConfig,
        entry: &EntryPoint,
        working_dir: PathBuf,
        env: EnvExports,
    ) -> Self {
        let server = &config.server;
        Self {
            program: config.python.clone(),
            args: vec![
                "-m".to_string(),
                server.module.clone(),
                entry.asgi_target(&server.app_object),
                "--host".to_string(),
                server.host.clone(),
                "--port".to_string(),
                server.port.to_string(),
            ],
            working_dir,
            env,
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
