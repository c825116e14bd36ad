use std::sync::Mutex;
use std::time::Duration;

use crate::domain::{AppError, LaunchPlan};
use crate::ports::{CommandOutput, CommandRunner};

enum Response {
    Output(CommandOutput),
    SpawnError,
    Hang,
}

/// Records every invocation; responses are chosen by command-line prefix.
///
/// Unmatched commands succeed with empty output. Later rules win.
#[derive(Default)]
pub struct FakeCommandRunner {
    rules: Mutex<Vec<(String, Response)>>,
    pub calls: Mutex<Vec<String>>,
    /// Command lines run through `run_streamed`.
    pub streamed: Mutex<Vec<String>>,
    pub launched: Mutex<Vec<LaunchPlan>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed_with(&self, prefix: &str, stdout: &str) {
        let output = CommandOutput {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        };
        self.rules.lock().unwrap().push((prefix.to_string(), Response::Output(output)));
    }

    pub fn fail(&self, prefix: &str, stderr: &str) {
        let output = CommandOutput {
            success: false,
            code: Some(1),
            stdout: String::new(),
            stderr: stderr.to_string(),
        };
        self.rules.lock().unwrap().push((prefix.to_string(), Response::Output(output)));
    }

    pub fn missing(&self, prefix: &str) {
        self.rules.lock().unwrap().push((prefix.to_string(), Response::SpawnError));
    }

    /// Never finishes; timed runs report a timeout.
    pub fn hang(&self, prefix: &str) {
        self.rules.lock().unwrap().push((prefix.to_string(), Response::Hang));
    }

    pub fn streamed(&self) -> Vec<String> {
        self.streamed.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|call| call.starts_with(prefix))
    }

    pub fn launched(&self) -> Vec<LaunchPlan> {
        self.launched.lock().unwrap().clone()
    }
}

impl FakeCommandRunner {
    fn respond(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, AppError> {
        let line =
            std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");
        self.calls.lock().unwrap().push(line.clone());

        let rules = self.rules.lock().unwrap();
        match rules.iter().rev().find(|(prefix, _)| line.starts_with(prefix.as_str())) {
            Some((_, Response::Output(output))) => Ok(output.clone()),
            Some((_, Response::SpawnError)) => {
                Err(AppError::tool_error(program, "No such file or directory (os error 2)"))
            }
            Some((_, Response::Hang)) => match timeout {
                Some(limit) => {
                    Err(AppError::tool_error(program, format!("timed out after {:?}", limit)))
                }
                None => panic!("untimed run of hanging command: {}", line),
            },
            None => Ok(CommandOutput { success: true, code: Some(0), ..Default::default() }),
        }
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        self.respond(program, args, None)
    }

    fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<CommandOutput, AppError> {
        self.respond(program, args, Some(timeout))
    }

    fn run_streamed(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let line =
            std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");
        self.streamed.lock().unwrap().push(line);
        let mut output = self.respond(program, args, None)?;
        output.stdout.clear();
        output.stderr.clear();
        Ok(output)
    }

    fn exec(&self, plan: &LaunchPlan) -> Result<i32, AppError> {
        self.launched.lock().unwrap().push(plan.clone());
        Ok(0)
    }
}
