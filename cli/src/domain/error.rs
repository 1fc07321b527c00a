//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::fleet::{Environment, InstanceClass};

// ── Validation errors ─────────────────────────────────────────────────────────

/// Operator input that falls outside the closed vocabularies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown command '{value}'. Valid commands: {valid}")]
    UnknownCommand { value: String, valid: String },

    #[error("Unknown environment '{value}'. Valid environments: {valid}")]
    UnknownEnvironment { value: String, valid: String },

    #[error("Unknown instance class '{value}'. Valid instance classes: {valid}")]
    UnknownInstanceClass { value: String, valid: String },

    #[error("'{command}' needs an instance class: fleetop {command} <ENVIRONMENT> <INSTANCE_CLASS>")]
    MissingInstanceClass { command: String },
}

// ── Snapshot errors ───────────────────────────────────────────────────────────

/// Errors reading the cached inventory snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("No inventory snapshot at {}. Run 'fleetop' with no arguments to refresh.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Inventory snapshot {} is corrupt: {reason}. Run 'fleetop' with no arguments to refresh.", .path.display())]
    Corrupt { path: PathBuf, reason: String },
}

// ── Provisioning errors ───────────────────────────────────────────────────────

/// The provisioning source failed to list instances for an environment.
#[derive(Debug, Error)]
#[error("Listing instances for '{environment}' failed: {reason}")]
pub struct ProvisioningError {
    pub environment: Environment,
    pub reason: String,
}

// ── Configuration errors ──────────────────────────────────────────────────────

/// Configuration that cannot produce a well-defined remote action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("No log file configured for instance class '{0}'. Add it under log_files in the config file.")]
    MissingLogFile(InstanceClass),
}
