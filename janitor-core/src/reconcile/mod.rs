use crate::error::AppResult;
use crate::fs::FileSystemGateway;
use crate::paths::candidate_paths;
use std::path::{Path, PathBuf};

pub mod orphan_entries;
pub mod orphan_files;

pub use orphan_entries::OrphanEntryReconciler;
pub use orphan_files::OrphanFileReconciler;

/// Locates the file a catalog reference points at.
///
/// `Ok(None)` means no candidate exists. An error is only returned when no
/// candidate was found and at least one could not be checked, so a broken
/// mount never reads as a missing file.
pub async fn resolve_entry_file(
    fs: &dyn FileSystemGateway,
    media_dir: &Path,
    file_ref: &str,
) -> AppResult<Option<PathBuf>> {
    let mut first_error = None;

    for candidate in candidate_paths(media_dir, file_ref) {
        match fs.exists(&candidate).await {
            Ok(true) => return Ok(Some(candidate)),
            Ok(false) => {}
            Err(e) => {
                tracing::debug!("Could not check {}: {}", candidate.display(), e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(None),
    }
}
