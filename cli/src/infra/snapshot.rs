//! Infrastructure implementation of the `InventoryStore` port.
//!
//! `SnapshotFile` provides async load/save using `tokio::task::spawn_blocking`
//! with atomic write (temp file in the same directory + rename) so a reader
//! never sees a half-written snapshot.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::InventoryStore;
use crate::domain::{InventorySnapshot, SnapshotError};

/// JSON snapshot file — implements `InventoryStore` for the infra layer.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Create a store using the default path (`~/.fleetop/inventory.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(Self::with_path(home.join(".fleetop").join("inventory.json")))
    }

    /// Create a store with an explicit path (used in tests and `--snapshot`).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Synchronous load — used internally by `load` via `spawn_blocking`.
    fn load_sync(path: &Path) -> Result<InventorySnapshot> {
        if !path.exists() {
            return Err(SnapshotError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let corrupt = |reason: String| SnapshotError::Corrupt {
            path: path.to_path_buf(),
            reason,
        };
        let content = std::fs::read_to_string(path).map_err(|e| corrupt(e.to_string()))?;
        let snapshot: InventorySnapshot =
            serde_json::from_str(&content).map_err(|e| corrupt(e.to_string()))?;
        snapshot.validate().map_err(corrupt)?;
        Ok(snapshot)
    }

    /// Synchronous save — used internally by `save` via `spawn_blocking`.
    fn save_sync(path: &Path, snapshot: &InventorySnapshot) -> Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
        let content = serde_json::to_string_pretty(snapshot).context("serializing snapshot")?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("creating temp file in {}", parent.display()))?;
        writeln!(temp, "{content}")
            .with_context(|| format!("writing temp file {}", temp.path().display()))?;
        temp.as_file()
            .sync_all()
            .with_context(|| format!("syncing temp file {}", temp.path().display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(temp.path(), std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("setting permissions on {}", temp.path().display()))?;
        }

        temp.persist(path)
            .with_context(|| format!("finalizing snapshot file {}", path.display()))?;
        Ok(())
    }
}

impl InventoryStore for SnapshotFile {
    async fn load(&self) -> Result<InventorySnapshot> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .context("snapshot load task panicked")?
    }

    async fn save(&self, snapshot: &InventorySnapshot) -> Result<()> {
        let path = self.path.clone();
        let snapshot = snapshot.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &snapshot))
            .await
            .context("snapshot save task panicked")??;
        tracing::info!(path = %self.path.display(), "wrote inventory snapshot");
        Ok(())
    }
}
