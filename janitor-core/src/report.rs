use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// How one phase of a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhaseOutcome {
    Completed { removed: u64 },
    Disabled { error: String },
}

impl PhaseOutcome {
    pub fn removed(&self) -> u64 {
        match self {
            PhaseOutcome::Completed { removed } => *removed,
            PhaseOutcome::Disabled { .. } => 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, PhaseOutcome::Completed { .. })
    }
}

impl fmt::Display for PhaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseOutcome::Completed { removed } => write!(f, "{}", removed),
            PhaseOutcome::Disabled { error } => write!(f, "0 (phase skipped: {})", error),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub orphaned_entries: PhaseOutcome,
    pub orphaned_files: PhaseOutcome,
    pub quota_evicted: PhaseOutcome,
}

impl RunReport {
    pub fn total_removed(&self) -> u64 {
        self.orphaned_entries.removed() + self.orphaned_files.removed() + self.quota_evicted.removed()
    }

    pub fn phase_lines(&self) -> [String; 3] {
        [
            format!("Orphaned entries removed: {}", self.orphaned_entries),
            format!("Orphaned files removed: {}", self.orphaned_files),
            format!("Entries evicted for quota: {}", self.quota_evicted),
        ]
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Janitor finished: {} orphaned entries, {} orphaned files, {} evicted ({} total) in {} ms",
            self.orphaned_entries.removed(),
            self.orphaned_files.removed(),
            self.quota_evicted.removed(),
            self.total_removed(),
            (self.finished_at - self.started_at).num_milliseconds()
        )
    }
}
