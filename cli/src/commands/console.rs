//! `fleetop console <ENVIRONMENT>` — open an application console.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::SessionLauncher;
use crate::application::services::dispatch::open_console;
use crate::domain::{Command, Environment, ValidationError};
use crate::output::TerminalReporter;

/// Validate a two-argument invocation and open the environment's console.
///
/// Only `console` may omit the instance class.
///
/// # Errors
///
/// Returns a [`ValidationError`] for an unknown command or environment, or
/// for any command other than `console`; otherwise any launcher error.
pub async fn run(
    app: &AppContext,
    launcher: &impl SessionLauncher,
    command: &str,
    environment: &str,
) -> Result<()> {
    let command: Command = command.parse()?;
    let environment: Environment = environment.parse()?;
    if command != Command::Console {
        return Err(ValidationError::MissingInstanceClass {
            command: command.to_string(),
        }
        .into());
    }

    let reporter = TerminalReporter::new(&app.output);
    open_console(environment, launcher, &app.config, &reporter).await?;
    Ok(())
}
