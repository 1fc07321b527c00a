//! Application service — inventory refresh use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::Result;

use crate::application::ports::{InstanceLister, InventoryStore, ProgressReporter};
use crate::domain::{Environment, InventorySnapshot, ProvisioningError, parse_instance_listing};

/// Rebuilds the inventory snapshot from the provisioning source and saves it.
///
/// Every environment is listed in order. A listing failure for any one of
/// them aborts the whole refresh before anything is written, so the last
/// saved snapshot stays in place.
///
/// # Errors
///
/// Returns a [`ProvisioningError`] if listing any environment fails, or the
/// store's error if the snapshot cannot be saved.
pub async fn refresh_inventory(
    lister: &impl InstanceLister,
    store: &impl InventoryStore,
    reporter: &impl ProgressReporter,
    address_prefix: &str,
) -> Result<InventorySnapshot> {
    let mut snapshot = InventorySnapshot::new();

    for environment in Environment::ALL {
        reporter.step(&format!("listing instances in {environment}..."));
        let raw = lister
            .list_instances(environment)
            .await
            .map_err(|e| ProvisioningError {
                environment,
                reason: format!("{e:#}"),
            })?;

        let entries = parse_instance_listing(&raw, address_prefix);
        tracing::debug!(%environment, hosts = entries.len(), "parsed instance listing");
        if entries.is_empty() {
            reporter.warn(&format!("no instances found in {environment}"));
        }
        snapshot.insert(environment, entries);
    }

    store.save(&snapshot).await?;
    tracing::info!(
        environments = Environment::ALL.len(),
        "inventory snapshot saved"
    );
    reporter.success("Inventory is up to date");
    Ok(snapshot)
}
