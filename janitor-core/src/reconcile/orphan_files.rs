use crate::catalog::CatalogStore;
use crate::error::AppResult;
use crate::fs::FileSystemGateway;
use std::path::Path;

/// Removes media files that no local catalog entry refers to.
pub struct OrphanFileReconciler<'a> {
    store: &'a CatalogStore,
    fs: &'a dyn FileSystemGateway,
    media_dir: &'a Path,
    extension: &'a str,
}

impl<'a> OrphanFileReconciler<'a> {
    pub fn new(
        store: &'a CatalogStore,
        fs: &'a dyn FileSystemGateway,
        media_dir: &'a Path,
        extension: &'a str,
    ) -> Self {
        Self {
            store,
            fs,
            media_dir,
            extension,
        }
    }

    #[tracing::instrument(skip(self), fields(media_dir = %self.media_dir.display()))]
    pub async fn run(&self) -> AppResult<u64> {
        tracing::info!("Scanning media directory for untracked files...");
        let names = self
            .fs
            .list_regular_files(self.media_dir, self.extension)
            .await?;
        tracing::debug!("Found {} candidate files", names.len());

        let mut removed = 0;
        for name in names {
            let path = self.media_dir.join(&name);
            let full_path = path.to_string_lossy();

            match self.is_catalogued(&full_path, &name).await {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    tracing::error!("Catalog lookup failed for {}, keeping file: {}", full_path, e);
                    continue;
                }
            }

            tracing::warn!("No catalog entry for {}", full_path);
            match self.fs.remove(&path).await {
                Ok(()) => {
                    tracing::info!("Removed orphaned file {}", full_path);
                    removed += 1;
                }
                Err(e) => tracing::error!("Failed to remove {}: {}", full_path, e),
            }
        }

        tracing::info!("Removed {} orphaned files", removed);
        Ok(removed)
    }

    async fn is_catalogued(&self, full_path: &str, name: &str) -> AppResult<bool> {
        if self.store.exists_by_path(full_path).await? {
            return Ok(true);
        }
        self.store.exists_by_path(name).await
    }
}
