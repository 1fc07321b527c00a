//! `fleetop` with no arguments — rebuild the inventory snapshot.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::InstanceLister;
use crate::application::services::refresh::refresh_inventory;
use crate::output::TerminalReporter;

/// Run the refresh, listing every environment through `lister`.
///
/// # Errors
///
/// Returns an error if any environment cannot be listed (the previous
/// snapshot is kept) or the snapshot cannot be written.
pub async fn run(app: &AppContext, lister: &impl InstanceLister) -> Result<()> {
    let reporter = TerminalReporter::new(&app.output);
    let snapshot =
        refresh_inventory(lister, &app.store, &reporter, &app.config.address_prefix).await?;
    for environment in snapshot.environments() {
        app.output.kv(
            &format!("{environment}:"),
            &format!("{} hosts", snapshot.entries(environment).len()),
        );
    }
    app.output
        .kv("Snapshot:", &app.store.path().display().to_string());
    Ok(())
}
