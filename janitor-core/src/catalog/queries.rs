//! SQL owned by [`CatalogStore`](super::CatalogStore).
//!
//! Nullable columns are coalesced here so rows always decode into
//! [`CatalogEntry`](crate::models::CatalogEntry).

pub const SCHEMA: &str = include_str!("schema.sql");

pub const COUNT_ENTRIES: &str = "SELECT COUNT(*) FROM songs";

pub const RANKED_PAGE: &str = r#"
    SELECT id,
           COALESCE(file_path, '') AS file_path,
           COALESCE(title, '') AS title,
           COALESCE(play_count, 0) AS play_count,
           COALESCE(last_played, 0) AS last_played,
           COALESCE(is_stream, 0) AS is_stream
    FROM songs
    ORDER BY is_stream ASC, play_count ASC, last_played ASC, id ASC
    LIMIT ?1
"#;

pub const LOCAL_ENTRIES: &str = r#"
    SELECT id,
           COALESCE(file_path, '') AS file_path,
           COALESCE(title, '') AS title,
           COALESCE(play_count, 0) AS play_count,
           COALESCE(last_played, 0) AS last_played,
           COALESCE(is_stream, 0) AS is_stream
    FROM songs
    WHERE COALESCE(is_stream, 0) = 0
    ORDER BY id ASC
"#;

// ?1 is the candidate as given, ?2 its final path component. The suffix
// test only narrows the rows; the component comparison happens in Rust.
pub const PATH_MATCH_CANDIDATES: &str = r#"
    SELECT file_path
    FROM songs
    WHERE COALESCE(is_stream, 0) = 0
      AND file_path IS NOT NULL
      AND (file_path = ?1 OR (length(?2) > 0 AND substr(file_path, -length(?2)) = ?2))
"#;

pub const DELETE_PLAYLIST_LINKS: &str = "DELETE FROM playlist_songs WHERE song_id = ?1";

pub const DELETE_QUEUE_ITEMS: &str = "DELETE FROM queue_items WHERE song_id = ?1";

pub const DELETE_ENTRY: &str = "DELETE FROM songs WHERE id = ?1";
