//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;

use crate::domain::{Environment, FleetConfig, InventorySnapshot};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
    /// Run a program with inherited stdio and return only its exit status.
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<std::process::ExitStatus>;
}

// ── Provisioning Port ─────────────────────────────────────────────────────────

/// Lists the running instances of an environment as raw, line-oriented text.
#[allow(async_fn_in_trait)]
pub trait InstanceLister {
    /// One blocking listing call for `environment`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provisioning source cannot be queried.
    async fn list_instances(&self, environment: Environment) -> Result<String>;
}

// ── Session Launcher Port ─────────────────────────────────────────────────────

/// Opens a new interactive terminal session running a shell command line.
///
/// Fire-and-forget: implementations return once the session has been opened
/// and never wait for the remote command to finish.
#[allow(async_fn_in_trait)]
pub trait SessionLauncher {
    /// Open a session running `command_line`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session could not be opened.
    async fn launch(&self, command_line: &str) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── State and Config Ports ────────────────────────────────────────────────────

/// Abstracts inventory snapshot persistence (load/save).
#[allow(async_fn_in_trait)]
pub trait InventoryStore {
    /// Load the last saved snapshot.
    ///
    /// # Errors
    ///
    /// Fails with `SnapshotError::NotFound` when nothing has been saved and
    /// `SnapshotError::Corrupt` when the stored content is not well-formed.
    async fn load(&self) -> Result<InventorySnapshot>;
    /// Replace the stored snapshot wholesale. Readers never observe a
    /// partially written snapshot.
    async fn save(&self, snapshot: &InventorySnapshot) -> Result<()>;
}

/// Abstracts loading the operator configuration.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<FleetConfig>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
