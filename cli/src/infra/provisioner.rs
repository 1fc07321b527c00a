//! Infrastructure implementation of the `InstanceLister` port.
//!
//! `FleetCliLister<R>` shells out to the fleet CLI (`ey servers ...` by
//! default) through a `CommandRunner`.

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, InstanceLister};
use crate::domain::Environment;
use crate::infra::command_runner::{DEFAULT_LIST_TIMEOUT, TokioCommandRunner};

/// Lists instances by running `<program> servers --environment <env> --account <account>`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct FleetCliLister<R: CommandRunner> {
    runner: R,
    program: String,
    account: String,
}

impl<R: CommandRunner> FleetCliLister<R> {
    pub fn new(runner: R, program: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
            account: account.into(),
        }
    }
}

impl FleetCliLister<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner(program: &str, account: &str) -> Self {
        Self::new(TokioCommandRunner::new(DEFAULT_LIST_TIMEOUT), program, account)
    }
}

impl<R: CommandRunner> InstanceLister for FleetCliLister<R> {
    async fn list_instances(&self, environment: Environment) -> Result<String> {
        let output = self
            .runner
            .run(
                &self.program,
                &[
                    "servers",
                    "--environment",
                    environment.as_str(),
                    "--account",
                    &self.account,
                ],
            )
            .await
            .with_context(|| format!("running {} servers", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            anyhow::bail!(
                "{} servers exited with {}{}",
                self.program,
                output.status,
                if stderr.is_empty() {
                    String::new()
                } else {
                    format!(": {stderr}")
                }
            );
        }

        String::from_utf8(output.stdout).context("provisioning output is not valid UTF-8")
    }
}
