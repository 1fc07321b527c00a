//! Application service — intent dispatch and the console shortcut.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};

use crate::application::ports::{InventoryStore, ProgressReporter, SessionLauncher};
use crate::domain::{
    Command, Environment, FleetConfig, Intent, RemoteAction, console_action, dispatch,
    resolve_hosts,
};

/// Resolves hosts for `intent`, plans its remote actions, then launches them.
///
/// Every action is planned before the first launch, so validation and
/// configuration failures never leave a partial set of sessions open. A
/// `console` intent takes the console shortcut without reading the snapshot.
///
/// Returns the actions that were launched.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, the configuration has
/// no log file for the class, or the launcher fails to open a session.
pub async fn run_intent(
    intent: &Intent,
    store: &impl InventoryStore,
    launcher: &impl SessionLauncher,
    config: &FleetConfig,
    reporter: &impl ProgressReporter,
) -> Result<Vec<RemoteAction>> {
    if intent.command() == Command::Console {
        let action = open_console(intent.environment(), launcher, config, reporter).await?;
        return Ok(vec![action]);
    }

    let snapshot = store.load().await?;
    let addresses = resolve_hosts(
        intent.instance_class(),
        snapshot.entries(intent.environment()),
    );
    tracing::debug!(
        command = %intent.command(),
        environment = %intent.environment(),
        class = %intent.instance_class(),
        hosts = addresses.len(),
        "resolved hosts"
    );

    let actions = dispatch(intent, &addresses, config)?;
    if actions.is_empty() {
        reporter.warn(&format!(
            "no {} hosts in {}; nothing to open",
            intent.instance_class(),
            intent.environment()
        ));
        return Ok(actions);
    }

    launch_all(&actions, launcher, config, reporter).await?;
    Ok(actions)
}

/// Opens one interactive console session for `environment`.
///
/// # Errors
///
/// Returns an error if the launcher fails to open the session.
pub async fn open_console(
    environment: Environment,
    launcher: &impl SessionLauncher,
    config: &FleetConfig,
    reporter: &impl ProgressReporter,
) -> Result<RemoteAction> {
    let action = console_action(environment);
    launch_all(std::slice::from_ref(&action), launcher, config, reporter).await?;
    Ok(action)
}

async fn launch_all(
    actions: &[RemoteAction],
    launcher: &impl SessionLauncher,
    config: &FleetConfig,
    reporter: &impl ProgressReporter,
) -> Result<()> {
    for action in actions {
        let line = action.command_line(config);
        tracing::info!(command_line = %line, "launching session");
        launcher
            .launch(&line)
            .await
            .with_context(|| format!("opening {action}"))?;
        reporter.success(&format!("opened {action}"));
    }
    Ok(())
}
