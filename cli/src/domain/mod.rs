//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod fleet;
pub mod intent;
pub mod inventory;
pub mod resolver;

pub use config::FleetConfig;
pub use dispatch::{MonitorTarget, RemoteAction, console_action, dispatch, monitor_target};
pub use error::{ConfigurationError, ProvisioningError, SnapshotError, ValidationError};
pub use fleet::{Command, Environment, InstanceClass};
pub use intent::Intent;
pub use inventory::{InventoryEntry, InventorySnapshot, is_host_address, parse_instance_listing};
pub use resolver::{host_group_prefix, resolve_hosts};
