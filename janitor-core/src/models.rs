use serde::Serialize;

/// A row of the `songs` table as seen by the janitor.
///
/// `play_count`, `last_played` and `is_stream` are nullable in the catalog;
/// the store reads NULL as zero / false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CatalogEntry {
    pub id: i64,
    pub file_path: String,
    pub title: String,
    pub play_count: i64,
    pub last_played: i64,
    pub is_stream: bool,
}

impl CatalogEntry {
    /// Local entries own exactly one file below the media directory.
    pub fn is_local(&self) -> bool {
        !self.is_stream
    }

    pub fn has_file_reference(&self) -> bool {
        !self.file_path.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RegularFile,
    Directory,
    Other,
}

/// One record of a media directory listing. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
