use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::domain::{AppError, LaunchPlan};
use crate::ports::{CommandOutput, CommandRunner};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs programs with `std::process::Command`, inheriting the current environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn launch_command(plan: &LaunchPlan) -> Command {
        let mut command = Command::new(&plan.program);
        command.args(&plan.args).current_dir(&plan.working_dir);
        for (key, value) in plan.env.iter() {
            command.env(key, value);
        }
        command
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| AppError::tool_error(program, err.to_string()))?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<CommandOutput, AppError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| AppError::tool_error(program, err.to_string()))?;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if started.elapsed() >= timeout => {
                    let _ = child.kill();
                    let _ = child.wait();
                    // Readers are left detached; a surviving grandchild may still hold the pipes.
                    return Err(AppError::tool_error(
                        program,
                        format!("timed out after {:?}", timeout),
                    ));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(err) => return Err(AppError::tool_error(program, err.to_string())),
            }
        };

        Ok(CommandOutput {
            success: status.success(),
            code: status.code(),
            stdout: stdout.join().unwrap_or_default(),
            stderr: stderr.join().unwrap_or_default(),
        })
    }

    fn run_streamed(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .map_err(|err| AppError::tool_error(program, err.to_string()))?;

        Ok(CommandOutput { success: status.success(), code: status.code(), ..Default::default() })
    }

    #[cfg(unix)]
    fn exec(&self, plan: &LaunchPlan) -> Result<i32, AppError> {
        use std::os::unix::process::CommandExt;

        // Only returns on failure.
        let err = Self::launch_command(plan).exec();
        Err(AppError::Handoff { program: plan.program.clone(), details: err.to_string() })
    }

    #[cfg(not(unix))]
    fn exec(&self, plan: &LaunchPlan) -> Result<i32, AppError> {
        let status = Self::launch_command(plan).status().map_err(|err| AppError::Handoff {
            program: plan.program.clone(),
            details: err.to_string(),
        })?;
        Ok(status.code().unwrap_or(1))
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
