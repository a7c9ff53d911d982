#![allow(dead_code)]

use janitor_core::{AppError, AppResult, CatalogStore, DirEntry, FileSystemGateway, LocalFileSystem, StoreOptions};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A catalog file plus a media directory, both inside one temp dir.
pub struct Fixture {
    _root: TempDir,
    pub media_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub store: CatalogStore,
}

pub struct Song<'a> {
    pub title: &'a str,
    pub file_path: &'a str,
    pub plays: i64,
    pub last_played: Option<i64>,
    pub is_stream: bool,
}

impl<'a> Song<'a> {
    pub fn local(title: &'a str, file_path: &'a str) -> Self {
        Self {
            title,
            file_path,
            plays: 0,
            last_played: None,
            is_stream: false,
        }
    }

    pub fn stream(title: &'a str, url: &'a str) -> Self {
        Self {
            is_stream: true,
            ..Self::local(title, url)
        }
    }

    pub fn plays(mut self, plays: i64) -> Self {
        self.plays = plays;
        self
    }

    pub fn last_played(mut self, at: i64) -> Self {
        self.last_played = Some(at);
        self
    }
}

impl Fixture {
    pub async fn new() -> Self {
        let fixture = Self::without_schema().await;
        fixture.store.ensure_schema().await.unwrap();
        fixture
    }

    pub async fn without_schema() -> Self {
        let root = tempfile::tempdir().unwrap();
        let media_dir = root.path().join("media");
        std::fs::create_dir(&media_dir).unwrap();
        let catalog_path = root.path().join("musicbot.db");

        let options = StoreOptions {
            create_if_missing: true,
            ..StoreOptions::default()
        };
        let store = CatalogStore::open(&catalog_path, &options).await.unwrap();

        Self {
            _root: root,
            media_dir,
            catalog_path,
            store,
        }
    }

    pub fn media_path(&self, name: &str) -> String {
        self.media_dir.join(name).to_string_lossy().into_owned()
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.media_dir.join(name);
        std::fs::write(&path, b"ID3").unwrap();
        path
    }

    pub fn media_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.media_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub async fn insert(&self, song: Song<'_>) -> i64 {
        sqlx::query(
            "INSERT INTO songs (title, url, platform, file_path, download_date, play_count, last_played, is_stream)
             VALUES (?1, ?2, 'youtube', ?3, 1700000000, ?4, ?5, ?6)",
        )
        .bind(song.title)
        .bind(format!("https://example.com/watch/{}", song.title))
        .bind(song.file_path)
        .bind(song.plays)
        .bind(song.last_played)
        .bind(song.is_stream)
        .execute(self.store.pool())
        .await
        .unwrap()
        .last_insert_rowid()
    }

    pub async fn add_to_playlist(&self, song_id: i64, playlist_id: i64) {
        sqlx::query(
            "INSERT OR IGNORE INTO playlists (id, title, url, platform, download_date)
             VALUES (?1, 'mix', 'https://example.com/list/' || ?1, 'youtube', 1700000000)",
        )
        .bind(playlist_id)
        .execute(self.store.pool())
        .await
        .unwrap();

        sqlx::query("INSERT INTO playlist_songs (playlist_id, song_id, position) VALUES (?1, ?2, 0)")
            .bind(playlist_id)
            .bind(song_id)
            .execute(self.store.pool())
            .await
            .unwrap();
    }

    pub async fn add_to_queue(&self, song_id: i64) {
        sqlx::query(
            "INSERT OR IGNORE INTO queues (id, guild_id, created_at, updated_at)
             VALUES (1, 'guild', 1700000000, 1700000000)",
        )
        .execute(self.store.pool())
        .await
        .unwrap();

        sqlx::query(
            "INSERT INTO queue_items (queue_id, song_id, title, url, position)
             VALUES (1, ?1, 'queued', 'https://example.com/queued', 0)",
        )
        .bind(song_id)
        .execute(self.store.pool())
        .await
        .unwrap();
    }

    pub async fn song_ids(&self) -> Vec<i64> {
        sqlx::query_scalar("SELECT id FROM songs ORDER BY id")
            .fetch_all(self.store.pool())
            .await
            .unwrap()
    }

    pub async fn rows_for(&self, table: &str, song_id: i64) -> i64 {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE song_id = ?1", table);
        sqlx::query_scalar(&sql)
            .bind(song_id)
            .fetch_one(self.store.pool())
            .await
            .unwrap()
    }
}

/// Local disk access whose removals always fail.
pub struct ReadOnlyFs;

#[async_trait::async_trait]
impl FileSystemGateway for ReadOnlyFs {
    async fn list_entries(&self, directory: &Path) -> AppResult<Vec<DirEntry>> {
        LocalFileSystem.list_entries(directory).await
    }

    async fn exists(&self, path: &Path) -> AppResult<bool> {
        LocalFileSystem.exists(path).await
    }

    async fn remove(&self, path: &Path) -> AppResult<()> {
        Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("read-only: {}", path.display()),
        )))
    }
}
