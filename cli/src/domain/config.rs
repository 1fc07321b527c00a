//! Domain types for fleetop configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigurationError;
use crate::domain::fleet::InstanceClass;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.fleetop/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Provisioning account passed to the fleet CLI.
    pub account: String,
    /// SSH login user on every host.
    pub deploy_user: String,
    /// Deployed application root; logs live under `<deploy_path>/log/`.
    pub deploy_path: String,
    /// Address prefix identifying host lines in provisioning output.
    pub address_prefix: String,
    /// Log file tailed by `logs`, per instance class.
    pub log_files: BTreeMap<InstanceClass, String>,
    /// Program that opens a new terminal tab running a command line.
    pub launcher: String,
    /// Fleet CLI used to list instances and open consoles and monitors.
    pub provisioner: String,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            account: "fleet".to_string(),
            deploy_user: "deploy".to_string(),
            deploy_path: "/data/app/current".to_string(),
            address_prefix: "ec2-".to_string(),
            log_files: default_log_files(),
            launcher: "ttab".to_string(),
            provisioner: "ey".to_string(),
        }
    }
}

fn default_log_files() -> BTreeMap<InstanceClass, String> {
    BTreeMap::from([
        (InstanceClass::Sites, "background_jobs.log".to_string()),
        (InstanceClass::Images, "image_processor.log".to_string()),
        (InstanceClass::Thumbs, "thumb_processor.log".to_string()),
        (InstanceClass::Apps, "production.log".to_string()),
    ])
}

impl FleetConfig {
    /// Log file name for `class`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingLogFile`] when the table has no
    /// entry (or an empty one) for the class.
    pub fn log_file(&self, class: InstanceClass) -> Result<&str, ConfigurationError> {
        self.log_files
            .get(&class)
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .ok_or(ConfigurationError::MissingLogFile(class))
    }

    /// Absolute path of the log file for `class` on a remote host.
    ///
    /// # Errors
    ///
    /// Same as [`FleetConfig::log_file`].
    pub fn log_path(&self, class: InstanceClass) -> Result<String, ConfigurationError> {
        let file = self.log_file(class)?;
        Ok(format!("{}/log/{file}", self.deploy_path.trim_end_matches('/')))
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
