//! Closed operator vocabularies: environments, commands and instance classes.
//!
//! Pure types only — parsing from operator input fails explicitly on unknown
//! values instead of falling back to a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

// ── Environment ──────────────────────────────────────────────────────────────

/// A named deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Staging,
}

impl Environment {
    /// Every environment, in refresh order.
    pub const ALL: [Environment; 2] = [Environment::Production, Environment::Staging];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Staging => "staging",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownEnvironment {
                value: s.to_string(),
                valid: join(&Self::ALL),
            })
    }
}

// ── Command ──────────────────────────────────────────────────────────────────

/// An operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Logs,
    Htop,
    Console,
    Ssh,
}

impl Command {
    pub const ALL: [Command; 4] = [Command::Logs, Command::Htop, Command::Console, Command::Ssh];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Logs => "logs",
            Command::Htop => "htop",
            Command::Console => "console",
            Command::Ssh => "ssh",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCommand {
                value: s.to_string(),
                valid: join(&Self::ALL),
            })
    }
}

// ── InstanceClass ────────────────────────────────────────────────────────────

/// An operator-facing fleet role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceClass {
    Apps,
    Sites,
    Images,
    Thumbs,
}

impl InstanceClass {
    pub const ALL: [InstanceClass; 4] = [
        InstanceClass::Apps,
        InstanceClass::Sites,
        InstanceClass::Images,
        InstanceClass::Thumbs,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InstanceClass::Apps => "apps",
            InstanceClass::Sites => "sites",
            InstanceClass::Images => "images",
            InstanceClass::Thumbs => "thumbs",
        }
    }
}

impl fmt::Display for InstanceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstanceClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownInstanceClass {
                value: s.to_string(),
                valid: join(&Self::ALL),
            })
    }
}

fn join<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
