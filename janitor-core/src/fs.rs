use crate::error::{AppError, AppResult};
use crate::models::{DirEntry, EntryKind};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// The janitor's view of the media directory.
#[async_trait]
pub trait FileSystemGateway: Send + Sync {
    /// Every entry directly inside `directory`, sorted by name.
    async fn list_entries(&self, directory: &Path) -> AppResult<Vec<DirEntry>>;

    async fn exists(&self, path: &Path) -> AppResult<bool>;

    async fn remove(&self, path: &Path) -> AppResult<()>;

    async fn check_readable(&self, directory: &Path) -> AppResult<()> {
        self.list_entries(directory).await.map(|_| ())
    }

    /// Names of visible regular files in `directory` ending in `extension`.
    async fn list_regular_files(
        &self,
        directory: &Path,
        extension: &str,
    ) -> AppResult<Vec<String>> {
        let entries = self.list_entries(directory).await?;
        Ok(filter_regular_files(entries, extension))
    }
}

pub fn filter_regular_files(entries: Vec<DirEntry>, extension: &str) -> Vec<String> {
    let mut names: Vec<String> = entries
        .into_iter()
        .filter(|e| e.kind == EntryKind::RegularFile)
        .filter(|e| !e.is_hidden())
        .filter(|e| e.name.ends_with(extension))
        .map(|e| e.name)
        .collect();
    names.sort();
    names
}

/// [`FileSystemGateway`] over the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystemGateway for LocalFileSystem {
    async fn list_entries(&self, directory: &Path) -> AppResult<Vec<DirEntry>> {
        let mut reader = fs::read_dir(directory).await?;

        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!("Skipping non UTF-8 file name in {}: {:?}", directory.display(), raw);
                    continue;
                }
            };

            // file_type() does not follow symlinks, so links land in Other.
            let file_type = entry.file_type().await?;
            let kind = if file_type.is_file() {
                EntryKind::RegularFile
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };
            entries.push(DirEntry { name, kind });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn exists(&self, path: &Path) -> AppResult<bool> {
        match fs::metadata(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    async fn remove(&self, path: &Path) -> AppResult<()> {
        fs::remove_file(path).await?;
        Ok(())
    }

    async fn check_readable(&self, directory: &Path) -> AppResult<()> {
        let metadata = fs::metadata(directory).await?;
        if !metadata.is_dir() {
            return Err(AppError::InvalidPath(format!(
                "{} is not a directory",
                directory.display()
            )));
        }
        let _entries = fs::read_dir(directory).await?;
        Ok(())
    }
}
