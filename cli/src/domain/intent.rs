//! The validated operator request.

use crate::domain::error::ValidationError;
use crate::domain::fleet::{Command, Environment, InstanceClass};

/// A `{command, environment, instance class}` triple whose fields have all
/// passed membership checks.
///
/// Fields are private: the only way to build an `Intent` is through
/// [`Intent::new`] with already-typed values or [`Intent::parse`] with raw
/// operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    command: Command,
    environment: Environment,
    instance_class: InstanceClass,
}

impl Intent {
    #[must_use]
    pub fn new(command: Command, environment: Environment, instance_class: InstanceClass) -> Self {
        Self {
            command,
            environment,
            instance_class,
        }
    }

    /// Parses raw operator arguments. Each field is trimmed before lookup.
    ///
    /// Fields are checked in argument order and the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first field that is not in
    /// its closed set.
    pub fn parse(command: &str, environment: &str, instance_class: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            command: command.parse()?,
            environment: environment.parse()?,
            instance_class: instance_class.parse()?,
        })
    }

    #[must_use]
    pub fn command(&self) -> Command {
        self.command
    }

    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[must_use]
    pub fn instance_class(&self) -> InstanceClass {
        self.instance_class
    }
}
