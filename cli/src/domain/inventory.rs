//! Fleet inventory model and the provisioning-listing parser.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::fleet::Environment;

/// One host's self-reported class tag and its reachable address.
///
/// The tag is whatever the provisioning source reports (e.g. `app-1a`), not
/// one of the operator-facing instance classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    #[serde(rename = "type")]
    pub instance_class: String,
    pub address: String,
}

impl InventoryEntry {
    #[must_use]
    pub fn new(instance_class: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            instance_class: instance_class.into(),
            address: address.into(),
        }
    }
}

/// Cached fleet topology, keyed by environment.
///
/// Serializes as `{ "<env>": [ { "type": ..., "address": ... } ] }` with
/// environment keys in sorted order. Entry order within an environment is the
/// order the provisioning source listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventorySnapshot {
    environments: BTreeMap<Environment, Vec<InventoryEntry>>,
}

impl InventorySnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entries recorded for `environment`.
    pub fn insert(&mut self, environment: Environment, entries: Vec<InventoryEntry>) {
        self.environments.insert(environment, entries);
    }

    /// Entries for `environment`; an environment with no recorded hosts yields
    /// an empty slice.
    #[must_use]
    pub fn entries(&self, environment: Environment) -> &[InventoryEntry] {
        self.environments
            .get(&environment)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Environments present in the snapshot, in key order.
    pub fn environments(&self) -> impl Iterator<Item = Environment> + '_ {
        self.environments.keys().copied()
    }

    /// Checks that every stored address is non-empty and safe to splice into
    /// a remote command line.
    ///
    /// # Errors
    ///
    /// Returns a description of the first offending entry.
    pub fn validate(&self) -> Result<(), String> {
        for (env, entries) in &self.environments {
            for (pos, entry) in entries.iter().enumerate() {
                if entry.address.trim().is_empty() {
                    return Err(format!("entry {pos} in '{env}' has an empty address"));
                }
                if !is_host_address(&entry.address) {
                    return Err(format!(
                        "entry {pos} in '{env}' has an invalid address '{}'",
                        entry.address
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Whether `address` looks like a hostname or IP literal.
///
/// Only ASCII alphanumerics and `.`, `-`, `_`, `:` are allowed, so an address
/// can never carry shell syntax into the launcher.
#[must_use]
pub fn is_host_address(address: &str) -> bool {
    !address.is_empty()
        && address
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':'))
}

/// Parses line-oriented provisioning output into inventory entries.
///
/// A line qualifies when it starts with `address_prefix` and carries at least
/// two whitespace-separated tokens. The first token is the address and the
/// last is the class tag. All other lines (headers, blanks, notices, and
/// addresses that fail [`is_host_address`]) are skipped.
#[must_use]
pub fn parse_instance_listing(raw: &str, address_prefix: &str) -> Vec<InventoryEntry> {
    raw.lines()
        .filter(|line| !address_prefix.is_empty() && line.starts_with(address_prefix))
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let address = tokens.next().filter(|a| is_host_address(a))?;
            let tag = tokens.last()?;
            Some(InventoryEntry::new(tag, address))
        })
        .collect()
}
