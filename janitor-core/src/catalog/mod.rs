use crate::error::{AppError, AppResult};
use crate::models::CatalogEntry;
use crate::paths::{normalize_for_comparison, references_match};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

pub mod queries;

use queries::*;

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub busy_timeout: Duration,
    /// Create an empty database file instead of failing when it is missing.
    pub create_if_missing: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            busy_timeout: crate::config::DEFAULT_BUSY_TIMEOUT,
            create_if_missing: false,
        }
    }
}

/// Typed access to the shared song catalog.
pub struct CatalogStore {
    db: SqlitePool,
}

impl CatalogStore {
    pub async fn open(path: &Path, options: &StoreOptions) -> AppResult<Self> {
        let connect_options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(options.create_if_missing)
            .foreign_keys(true)
            .busy_timeout(options.busy_timeout);

        // The bot and downloader write to the same file; one connection keeps
        // this run a single writer.
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_options)
            .await?;

        tracing::debug!("Opened catalog at {}", path.display());
        Ok(Self { db })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db
    }

    pub async fn close(&self) {
        self.db.close().await;
    }

    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.db).await?;
        Ok(())
    }

    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(COUNT_ENTRIES)
            .fetch_one(&self.db)
            .await?;
        Ok(count.max(0) as u64)
    }

    /// Lowest-priority entries first: local files before streams, then
    /// fewest plays, then least recently played.
    pub async fn ranked_page(&self, limit: i64) -> AppResult<Vec<CatalogEntry>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let entries = sqlx::query_as::<_, CatalogEntry>(RANKED_PAGE)
            .bind(limit)
            .fetch_all(&self.db)
            .await?;
        Ok(entries)
    }

    pub async fn local_entries(&self) -> AppResult<Vec<CatalogEntry>> {
        let entries = sqlx::query_as::<_, CatalogEntry>(LOCAL_ENTRIES)
            .fetch_all(&self.db)
            .await?;
        Ok(entries)
    }

    /// Whether a non-stream entry refers to `candidate`, either verbatim or
    /// by final path component.
    pub async fn exists_by_path(&self, candidate: &str) -> AppResult<bool> {
        let stored: Vec<String> = sqlx::query_scalar(PATH_MATCH_CANDIDATES)
            .bind(candidate)
            .bind(normalize_for_comparison(candidate))
            .fetch_all(&self.db)
            .await?;

        Ok(stored
            .iter()
            .any(|file_path| references_match(file_path, candidate)))
    }

    /// Removes an entry together with its playlist and queue memberships.
    ///
    /// Returns `false` if anything failed; the entry is then left exactly as
    /// it was.
    pub async fn delete_entry(&self, id: i64) -> bool {
        match self.delete_entry_tx(id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(entry_id = id, "Failed to delete catalog entry {}: {}", id, e);
                false
            }
        }
    }

    async fn delete_entry_tx(&self, id: i64) -> AppResult<()> {
        // Dropping `tx` without commit rolls every step back.
        let mut tx = self.db.begin().await?;

        sqlx::query(DELETE_PLAYLIST_LINKS)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|source| AppError::DeleteStep {
                step: "playlist memberships",
                source,
            })?;

        sqlx::query(DELETE_QUEUE_ITEMS)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|source| AppError::DeleteStep {
                step: "queue items",
                source,
            })?;

        let removed = sqlx::query(DELETE_ENTRY)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|source| AppError::DeleteStep {
                step: "song row",
                source,
            })?
            .rows_affected();

        if removed == 0 {
            return Err(AppError::NotFound(format!("catalog entry {}", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
