//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is built once in `Cli::run()` from the top-level flags and
//! the loaded configuration.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::{ConfigStore, SessionLauncher};
use crate::domain::FleetConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::launcher::{PrintLauncher, TerminalTabLauncher};
use crate::infra::provisioner::FleetCliLister;
use crate::infra::snapshot::SnapshotFile;
use crate::output::OutputContext;

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Print command lines instead of opening sessions.
    pub dry_run: bool,
    /// Explicit snapshot path (`--snapshot` / `FLEETOP_SNAPSHOT`).
    pub snapshot: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Operator configuration.
    pub config: FleetConfig,
    /// Inventory snapshot store.
    pub store: SnapshotFile,
    /// When `true`, sessions are printed rather than opened.
    pub dry_run: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be parsed or the home
    /// directory cannot be determined.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let config = YamlConfigStore.load()?;
        let store = match flags.snapshot {
            Some(path) => SnapshotFile::with_path(path),
            None => SnapshotFile::new()?,
        };
        // Dry-run output is the command lines themselves; keep it clean.
        let quiet = flags.quiet || flags.dry_run;

        Ok(Self {
            output: OutputContext::new(flags.no_color, quiet),
            config,
            store,
            dry_run: flags.dry_run,
        })
    }

    /// The production instance lister for the configured fleet CLI.
    #[must_use]
    pub fn lister(&self) -> FleetCliLister<TokioCommandRunner> {
        FleetCliLister::default_runner(&self.config.provisioner, &self.config.account)
    }

    /// The session launcher for the current mode.
    #[must_use]
    pub fn launcher(&self) -> Launcher {
        if self.dry_run {
            Launcher::Print(PrintLauncher)
        } else {
            Launcher::Tab(TerminalTabLauncher::default_runner(&self.config.launcher))
        }
    }
}

/// Launcher selected at runtime by `--dry-run`.
pub enum Launcher {
    Tab(TerminalTabLauncher<TokioCommandRunner>),
    Print(PrintLauncher),
}

impl SessionLauncher for Launcher {
    async fn launch(&self, command_line: &str) -> Result<()> {
        match self {
            Launcher::Tab(l) => l.launch(command_line).await,
            Launcher::Print(l) => l.launch(command_line).await,
        }
    }
}
