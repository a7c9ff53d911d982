use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MAX_ENTRIES: u64 = 500;
pub const DEFAULT_EXTENSION: &str = ".mp3";
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one janitor run.
#[derive(Debug, Clone)]
pub struct JanitorConfig {
    /// Directory the downloader writes media files into.
    pub media_dir: PathBuf,
    /// Case-sensitive filename suffix of files the janitor manages.
    pub extension: String,
    /// Catalog population cap enforced by quota eviction.
    pub max_entries: u64,
    /// How long to wait on a catalog locked by the bot or downloader.
    pub busy_timeout: Duration,
}

impl JanitorConfig {
    pub fn new(media_dir: impl Into<PathBuf>) -> Self {
        Self {
            media_dir: media_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_max_entries(mut self, max_entries: u64) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            media_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}
