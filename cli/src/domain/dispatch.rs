//! Command dispatch: a validated intent plus resolved hosts → remote actions.
//!
//! Planning is pure and total once an [`Intent`] exists; the only failure is a
//! configuration gap, and it surfaces before any action is launched.

use std::fmt;

use crate::domain::config::FleetConfig;
use crate::domain::error::ConfigurationError;
use crate::domain::fleet::{Command, Environment, InstanceClass};
use crate::domain::intent::Intent;

// ── Monitor policy ───────────────────────────────────────────────────────────

/// Which hosts a process monitor session attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorTarget {
    /// The environment's application-server group.
    AppServers,
}

impl MonitorTarget {
    fn provisioner_flag(self) -> &'static str {
        match self {
            MonitorTarget::AppServers => "--app-servers",
        }
    }
}

/// Host group a `htop` request opens, regardless of the requested class.
///
/// Known limitation: only the app-server group can be monitored, so
/// `htop <env> images` still opens htop on the app servers.
#[must_use]
pub fn monitor_target(_class: InstanceClass) -> MonitorTarget {
    MonitorTarget::AppServers
}

// ── Remote actions ───────────────────────────────────────────────────────────

/// One remote session to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAction {
    /// Interactive process monitor on a host group.
    Monitor {
        environment: Environment,
        target: MonitorTarget,
    },
    /// Interactive shell in the deploy directory.
    Shell { address: String },
    /// Follow-tail of a log file.
    Tail { address: String, log_path: String },
    /// Interactive application console scoped to an environment.
    Console { environment: Environment },
}

impl RemoteAction {
    /// Shell command line that opens this session.
    #[must_use]
    pub fn command_line(&self, config: &FleetConfig) -> String {
        let user = &config.deploy_user;
        match self {
            RemoteAction::Monitor {
                environment,
                target,
            } => format!(
                "{} ssh \"/usr/bin/htop\" -t {} -e {environment} -c {}",
                config.provisioner,
                target.provisioner_flag(),
                config.account
            ),
            RemoteAction::Shell { address } => format!(
                "ssh -t {user}@{address} \"cd {} && exec \\$SHELL -l\"",
                config.deploy_path
            ),
            RemoteAction::Tail { address, log_path } => {
                format!("ssh -t {user}@{address} \"tail -f {log_path}\"")
            }
            RemoteAction::Console { environment } => format!(
                "{} console -e {environment} -c {}",
                config.provisioner, config.account
            ),
        }
    }
}

impl fmt::Display for RemoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteAction::Monitor {
                environment,
                target: MonitorTarget::AppServers,
            } => write!(f, "htop on {environment} app servers"),
            RemoteAction::Shell { address } => write!(f, "shell on {address}"),
            RemoteAction::Tail { address, log_path } => write!(f, "tail {log_path} on {address}"),
            RemoteAction::Console { environment } => write!(f, "{environment} console"),
        }
    }
}

/// The console shortcut: one session scoped to `environment`, no inventory.
#[must_use]
pub fn console_action(environment: Environment) -> RemoteAction {
    RemoteAction::Console { environment }
}

/// Plans the remote actions for `intent` over the resolved `addresses`.
///
/// - `htop` yields exactly one action, whatever the address count.
/// - `ssh` and `logs` yield one action per address, in order.
/// - `console` yields the single console action.
///
/// # Errors
///
/// Returns [`ConfigurationError::MissingLogFile`] for `logs` when the config
/// has no log file for the intent's class.
pub fn dispatch(
    intent: &Intent,
    addresses: &[String],
    config: &FleetConfig,
) -> Result<Vec<RemoteAction>, ConfigurationError> {
    let actions = match intent.command() {
        Command::Htop => vec![RemoteAction::Monitor {
            environment: intent.environment(),
            target: monitor_target(intent.instance_class()),
        }],
        Command::Ssh => addresses
            .iter()
            .map(|address| RemoteAction::Shell {
                address: address.clone(),
            })
            .collect(),
        Command::Logs => {
            let log_path = config.log_path(intent.instance_class())?;
            addresses
                .iter()
                .map(|address| RemoteAction::Tail {
                    address: address.clone(),
                    log_path: log_path.clone(),
                })
                .collect()
        }
        Command::Console => vec![console_action(intent.environment())],
    };
    Ok(actions)
}
