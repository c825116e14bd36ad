use std::time::Duration;

use crate::domain::{AppError, LaunchPlan};

/// Captured result of a finished external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// First non-empty line of stdout, falling back to stderr.
    pub fn first_line(&self) -> &str {
        self.stdout
            .lines()
            .chain(self.stderr.lines())
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }

    /// Short failure description for logs and errors.
    pub fn failure_summary(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        };
        let stderr = self.stderr.trim();
        if stderr.is_empty() { status } else { format!("{}: {}", status, stderr) }
    }
}

/// Port for running external programs.
pub trait CommandRunner {
    /// Run a program to completion.
    ///
    /// Returns `Err` only when the program cannot be started; a non-zero exit is
    /// reported through `CommandOutput::success`.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError>;

    /// Like `run`, but a program still running after `timeout` is killed and reported
    /// as an error.
    fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<CommandOutput, AppError>;

    /// Run with stdout and stderr passed through to the console.
    ///
    /// The returned `stdout` and `stderr` are empty.
    fn run_streamed(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError>;

    /// Hand the process over to `plan`.
    ///
    /// Implementations that replace the current process never return `Ok`; others
    /// wait for the child and return its exit code.
    fn exec(&self, plan: &LaunchPlan) -> Result<i32, AppError>;
}
