//! Path equivalence rules shared by the catalog lookup and the reconcilers.
//!
//! Catalog rows store file references in three shapes: absolute paths,
//! paths relative to the working directory, and bare filenames. Both the
//! catalog side and the disk side reduce a reference with
//! [`normalize_for_comparison`] so the two never disagree.

use std::path::{Path, PathBuf};

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Final path component of `path`, the form in which references are
/// compared when an exact match fails.
pub fn normalize_for_comparison(path: &str) -> &str {
    path.rsplit(&SEPARATORS[..]).next().unwrap_or(path)
}

pub fn has_separator(path: &str) -> bool {
    path.contains(&SEPARATORS[..])
}

/// True when `stored` and `candidate` name the same media file under
/// either the exact or the bare-filename comparison.
pub fn references_match(stored: &str, candidate: &str) -> bool {
    if stored == candidate {
        return true;
    }
    let stored_name = normalize_for_comparison(stored);
    !stored_name.is_empty() && stored_name == normalize_for_comparison(candidate)
}

/// Filesystem locations a catalog reference may live at, in the order they
/// are tried. An empty reference has no candidates.
pub fn candidate_paths(media_dir: &Path, file_ref: &str) -> Vec<PathBuf> {
    if file_ref.trim().is_empty() {
        return Vec::new();
    }

    let as_stored = PathBuf::from(file_ref);
    let in_media_dir = if has_separator(file_ref) {
        media_dir.join(normalize_for_comparison(file_ref))
    } else {
        media_dir.join(file_ref)
    };

    if in_media_dir == as_stored {
        vec![as_stored]
    } else {
        vec![as_stored, in_media_dir]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_for_comparison() {
        assert_eq!(normalize_for_comparison("/srv/music/song.mp3"), "song.mp3");
        assert_eq!(normalize_for_comparison("music/song.mp3"), "song.mp3");
        assert_eq!(normalize_for_comparison("song.mp3"), "song.mp3");
        assert_eq!(normalize_for_comparison("C:\\music\\song.mp3"), "song.mp3");
        assert_eq!(normalize_for_comparison("music/"), "");
    }

    #[test]
    fn test_references_match() {
        assert!(references_match("media/song.mp3", "media/song.mp3"));
        assert!(references_match("song.mp3", "media/song.mp3"));
        assert!(references_match("/abs/media/song.mp3", "song.mp3"));
        assert!(!references_match("media/other.mp3", "media/song.mp3"));
        assert!(!references_match("media/", "other/"));
    }

    #[test]
    fn test_candidate_order_for_nested_reference() {
        let candidates = candidate_paths(Path::new("/srv/media"), "/old/place/song.mp3");
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/old/place/song.mp3"),
                PathBuf::from("/srv/media/song.mp3"),
            ]
        );
    }

    #[test]
    fn test_candidate_order_for_bare_reference() {
        let candidates = candidate_paths(Path::new("/srv/media"), "song.mp3");
        assert_eq!(
            candidates,
            vec![PathBuf::from("song.mp3"), PathBuf::from("/srv/media/song.mp3")]
        );
    }

    #[test]
    fn test_candidates_deduplicated() {
        let candidates = candidate_paths(Path::new("/srv/media"), "/srv/media/song.mp3");
        assert_eq!(candidates, vec![PathBuf::from("/srv/media/song.mp3")]);
    }

    #[test]
    fn test_empty_reference_has_no_candidates() {
        assert!(candidate_paths(Path::new("/srv/media"), "").is_empty());
        assert!(candidate_paths(Path::new("/srv/media"), "   ").is_empty());
    }
}
