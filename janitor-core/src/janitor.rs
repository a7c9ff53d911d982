use crate::catalog::CatalogStore;
use crate::config::JanitorConfig;
use crate::error::AppResult;
use crate::fs::FileSystemGateway;
use crate::quota::QuotaEvictor;
use crate::reconcile::{OrphanEntryReconciler, OrphanFileReconciler};
use crate::report::{PhaseOutcome, RunReport};
use chrono::Utc;

/// Runs the three maintenance phases in order: orphaned entries, orphaned
/// files, quota eviction. A failing phase never stops the ones after it.
pub struct Janitor<'a> {
    store: &'a CatalogStore,
    fs: &'a dyn FileSystemGateway,
    config: &'a JanitorConfig,
}

impl<'a> Janitor<'a> {
    pub fn new(store: &'a CatalogStore, fs: &'a dyn FileSystemGateway, config: &'a JanitorConfig) -> Self {
        Self { store, fs, config }
    }

    pub async fn run(&self) -> RunReport {
        let started_at = Utc::now();
        let media_dir = self.config.media_dir.as_path();

        let orphaned_entries = outcome(
            "orphaned entries",
            OrphanEntryReconciler::new(self.store, self.fs, media_dir)
                .run()
                .await,
        );

        let orphaned_files = outcome(
            "orphaned files",
            OrphanFileReconciler::new(self.store, self.fs, media_dir, &self.config.extension)
                .run()
                .await,
        );

        let quota_evicted = outcome(
            "quota eviction",
            QuotaEvictor::new(self.store, self.fs, media_dir, self.config.max_entries)
                .run()
                .await,
        );

        RunReport {
            started_at,
            finished_at: Utc::now(),
            orphaned_entries,
            orphaned_files,
            quota_evicted,
        }
    }
}

fn outcome(phase: &str, result: AppResult<u64>) -> PhaseOutcome {
    match result {
        Ok(removed) => PhaseOutcome::Completed { removed },
        Err(e) => {
            tracing::error!("Skipping {} phase: {}", phase, e);
            PhaseOutcome::Disabled {
                error: e.to_string(),
            }
        }
    }
}
