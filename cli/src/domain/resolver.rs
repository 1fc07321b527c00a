//! Host resolution: instance class → addresses in an environment's inventory.

use crate::domain::fleet::InstanceClass;
use crate::domain::inventory::InventoryEntry;

/// Host-group prefix the provisioning source uses for an instance class.
///
/// Several operator-facing classes share one physical host group: image and
/// site jobs both run on the `workers` hosts.
#[must_use]
pub fn host_group_prefix(class: InstanceClass) -> &'static str {
    match class {
        InstanceClass::Images | InstanceClass::Sites => "workers",
        InstanceClass::Apps => "app",
        InstanceClass::Thumbs => class.as_str(),
    }
}

/// Addresses of every entry whose tag starts with the class's host-group
/// prefix, in inventory order. Duplicates are kept.
#[must_use]
pub fn resolve_hosts(class: InstanceClass, entries: &[InventoryEntry]) -> Vec<String> {
    let prefix = host_group_prefix(class);
    entries
        .iter()
        .filter(|entry| entry.instance_class.starts_with(prefix))
        .map(|entry| entry.address.clone())
        .collect()
}
