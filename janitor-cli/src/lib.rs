//! Command-line front end for the media catalog janitor.
//!
//! Settings come from flags, environment variables or a `.env` file:
//!
//! - `JANITOR_MAX_ENTRIES` - catalog population cap (default: 500)
//! - `JANITOR_EXTENSION` - managed media file suffix (default: `.mp3`)
//! - `JANITOR_BUSY_TIMEOUT_SECS` - wait on a locked catalog (default: 10)

use anyhow::Context;
use clap::Parser;
use janitor_core::{
    CatalogStore, FileSystemGateway, Janitor, JanitorConfig, LocalFileSystem, RunReport,
    StoreOptions,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "media-janitor")]
#[command(version, about = "Reconcile the song catalog with the media directory and enforce its size cap")]
pub struct Cli {
    /// Path to the SQLite catalog.
    pub catalog: PathBuf,

    /// Directory holding the downloaded media files.
    pub media_dir: PathBuf,

    /// Maximum number of catalog entries to keep.
    #[arg(long, env = "JANITOR_MAX_ENTRIES", default_value_t = janitor_core::config::DEFAULT_MAX_ENTRIES)]
    pub max_entries: u64,

    /// Suffix of the media files the janitor manages (case-sensitive).
    #[arg(long, env = "JANITOR_EXTENSION", default_value = janitor_core::config::DEFAULT_EXTENSION)]
    pub extension: String,

    /// Seconds to wait for a catalog locked by another writer.
    #[arg(long, env = "JANITOR_BUSY_TIMEOUT_SECS", default_value_t = janitor_core::config::DEFAULT_BUSY_TIMEOUT.as_secs())]
    pub busy_timeout_secs: u64,

    /// Output format of the run report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn config(&self) -> JanitorConfig {
        JanitorConfig::new(&self.media_dir)
            .with_extension(&self.extension)
            .with_max_entries(self.max_entries)
            .with_busy_timeout(Duration::from_secs(self.busy_timeout_secs))
    }
}

/// Pre-flight checks followed by one full janitor run.
///
/// Errors returned here are fatal: nothing in the catalog or the media
/// directory has been touched.
pub async fn run(cli: &Cli) -> anyhow::Result<RunReport> {
    let config = cli.config();
    let fs = LocalFileSystem;

    fs.check_readable(&config.media_dir)
        .await
        .with_context(|| format!("Media directory {} is not readable", config.media_dir.display()))?;

    let options = StoreOptions {
        busy_timeout: config.busy_timeout,
        ..StoreOptions::default()
    };
    let store = CatalogStore::open(&cli.catalog, &options)
        .await
        .with_context(|| format!("Failed to open catalog {}", cli.catalog.display()))?;

    tracing::info!(
        catalog = %cli.catalog.display(),
        media_dir = %config.media_dir.display(),
        max_entries = config.max_entries,
        "Starting janitor run"
    );
    let report = Janitor::new(&store, &fs, &config).run().await;
    store.close().await;

    Ok(report)
}

pub fn render(report: &RunReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = report.phase_lines().to_vec();
            lines.push(report.summary_line());
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
