use crate::catalog::CatalogStore;
use crate::error::AppResult;
use crate::fs::FileSystemGateway;
use crate::models::CatalogEntry;
use crate::reconcile::resolve_entry_file;
use std::path::Path;

/// Keeps the catalog at or under `max_entries` by evicting the least played
/// local entries first.
pub struct QuotaEvictor<'a> {
    store: &'a CatalogStore,
    fs: &'a dyn FileSystemGateway,
    media_dir: &'a Path,
    max_entries: u64,
}

impl<'a> QuotaEvictor<'a> {
    pub fn new(
        store: &'a CatalogStore,
        fs: &'a dyn FileSystemGateway,
        media_dir: &'a Path,
        max_entries: u64,
    ) -> Self {
        Self {
            store,
            fs,
            media_dir,
            max_entries,
        }
    }

    /// Returns the number of entries removed from the catalog. Fails only
    /// when the catalog size or the ranking cannot be read.
    #[tracing::instrument(skip(self), fields(max_entries = self.max_entries))]
    pub async fn run(&self) -> AppResult<u64> {
        let count = self.store.count().await?;
        if count <= self.max_entries {
            tracing::info!("Catalog holds {} of {} entries, nothing to evict", count, self.max_entries);
            return Ok(0);
        }

        let deficit = count - self.max_entries;
        tracing::info!("Catalog holds {} entries, evicting {}", count, deficit);

        let victims = self
            .store
            .ranked_page(i64::try_from(deficit).unwrap_or(i64::MAX))
            .await?;
        if (victims.len() as u64) < deficit {
            tracing::warn!("Ranking returned {} of {} requested entries", victims.len(), deficit);
        }

        let mut evicted = 0;
        for entry in victims {
            self.remove_file_of(&entry).await;

            if self.store.delete_entry(entry.id).await {
                tracing::info!(
                    entry_id = entry.id,
                    plays = entry.play_count,
                    "Evicted '{}'",
                    entry.title
                );
                evicted += 1;
            }
        }

        tracing::info!("Evicted {} entries for quota", evicted);
        Ok(evicted)
    }

    async fn remove_file_of(&self, entry: &CatalogEntry) {
        if !entry.is_local() || !entry.has_file_reference() {
            return;
        }

        let path = match resolve_entry_file(self.fs, self.media_dir, &entry.file_path).await {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(e) => {
                tracing::error!(entry_id = entry.id, "Could not locate {}: {}", entry.file_path, e);
                return;
            }
        };

        if let Err(e) = self.fs.remove(&path).await {
            tracing::error!(entry_id = entry.id, "Failed to remove {}: {}", path.display(), e);
        }
    }
}
