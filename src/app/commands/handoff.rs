//! Step 8: process handoff to the ASGI server.

use crate::app::output;
use crate::domain::{AppError, LaunchPlan, StepKind};
use crate::ports::CommandRunner;

/// Replace (or, where unsupported, wait on) the server process. Returns its exit code.
pub fn execute<R: CommandRunner>(runner: &R, plan: &LaunchPlan) -> Result<i32, AppError> {
    output::step_started(StepKind::Handoff);
    output::info(StepKind::Handoff, format!("exec {}", plan.command_line()));
    runner.exec(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BootstrapConfig, EntryPoint, EnvExports};
    use crate::testing::FakeCommandRunner;
    use std::path::PathBuf;

    #[test]
    fn hands_plan_with_environment_to_runner() {
        let runner = FakeCommandRunner::new();
        let mut env = EnvExports::default();
        env.set("UPLOAD_FOLDER", "/tmp/po_uploads");
        let plan = LaunchPlan::asgi(
            &BootstrapConfig::default(),
            &EntryPoint::root(),
            PathBuf::from("/srv/app"),
            env,
        );

        let code = execute(&runner, &plan).unwrap();

        assert_eq!(code, 0);
        let launched = runner.launched();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0].env.get("UPLOAD_FOLDER"), Some("/tmp/po_uploads"));
        assert!(launched[0].args.contains(&"main:app".to_string()));
    }
}
