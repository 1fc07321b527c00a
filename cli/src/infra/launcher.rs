//! Infrastructure implementations of the `SessionLauncher` port.

use anyhow::Result;

use crate::application::ports::{CommandRunner, SessionLauncher};
use crate::infra::command_runner::{DEFAULT_LAUNCH_TIMEOUT, TokioCommandRunner};

/// Opens each session in a new terminal tab via an external program
/// (`ttab <command line>` by default).
///
/// The tab program returns as soon as the tab exists; the remote session
/// keeps running in it.
pub struct TerminalTabLauncher<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> TerminalTabLauncher<R> {
    pub fn new(runner: R, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }
}

impl TerminalTabLauncher<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner(program: &str) -> Self {
        Self::new(TokioCommandRunner::new(DEFAULT_LAUNCH_TIMEOUT), program)
    }
}

impl<R: CommandRunner> SessionLauncher for TerminalTabLauncher<R> {
    async fn launch(&self, command_line: &str) -> Result<()> {
        let status = self.runner.run_status(&self.program, &[command_line]).await?;
        anyhow::ensure!(status.success(), "{} exited with {status}", self.program);
        Ok(())
    }
}

/// Prints each command line instead of opening a session.
pub struct PrintLauncher;

impl SessionLauncher for PrintLauncher {
    async fn launch(&self, command_line: &str) -> Result<()> {
        println!("{command_line}");
        Ok(())
    }
}
