//! `fleetop <COMMAND> <ENVIRONMENT> <INSTANCE_CLASS>` — open remote sessions.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::SessionLauncher;
use crate::application::services::dispatch::run_intent;
use crate::domain::Intent;
use crate::output::TerminalReporter;

/// Validate the operator triple, then resolve hosts and open one session
/// per planned action.
///
/// # Errors
///
/// Returns a `ValidationError` before anything is loaded when a field is
/// outside its closed set; otherwise snapshot, configuration or launcher
/// errors from the dispatch service.
pub async fn run(
    app: &AppContext,
    launcher: &impl SessionLauncher,
    command: &str,
    environment: &str,
    instance_class: &str,
) -> Result<()> {
    let intent = Intent::parse(command, environment, instance_class)?;
    let reporter = TerminalReporter::new(&app.output);
    run_intent(&intent, &app.store, launcher, &app.config, &reporter).await?;
    Ok(())
}
