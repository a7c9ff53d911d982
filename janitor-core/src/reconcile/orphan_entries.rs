use super::resolve_entry_file;
use crate::catalog::CatalogStore;
use crate::error::AppResult;
use crate::fs::FileSystemGateway;
use std::path::Path;

/// Removes catalog entries whose file is gone from disk.
pub struct OrphanEntryReconciler<'a> {
    store: &'a CatalogStore,
    fs: &'a dyn FileSystemGateway,
    media_dir: &'a Path,
}

impl<'a> OrphanEntryReconciler<'a> {
    pub fn new(store: &'a CatalogStore, fs: &'a dyn FileSystemGateway, media_dir: &'a Path) -> Self {
        Self {
            store,
            fs,
            media_dir,
        }
    }

    /// Returns the number of entries removed. Only failing to list the
    /// catalog is an error; per-entry problems are logged and skipped.
    #[tracing::instrument(skip(self), fields(media_dir = %self.media_dir.display()))]
    pub async fn run(&self) -> AppResult<u64> {
        tracing::info!("Checking catalog entries for missing files...");
        let entries = self.store.local_entries().await?;

        let mut removed = 0;
        for entry in entries {
            if !entry.has_file_reference() {
                tracing::warn!(entry_id = entry.id, "Entry '{}' has no file reference", entry.title);
            } else {
                match resolve_entry_file(self.fs, self.media_dir, &entry.file_path).await {
                    Ok(Some(path)) => {
                        tracing::debug!(entry_id = entry.id, "Found {}", path.display());
                        continue;
                    }
                    Ok(None) => {
                        tracing::warn!(
                            entry_id = entry.id,
                            "File for '{}' is missing: {}",
                            entry.title,
                            entry.file_path
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            entry_id = entry.id,
                            "Could not resolve {} for '{}', keeping entry: {}",
                            entry.file_path,
                            entry.title,
                            e
                        );
                        continue;
                    }
                }
            }

            if self.store.delete_entry(entry.id).await {
                tracing::info!(entry_id = entry.id, "Removed orphaned entry '{}'", entry.title);
                removed += 1;
            }
        }

        tracing::info!("Removed {} orphaned catalog entries", removed);
        Ok(removed)
    }
}
