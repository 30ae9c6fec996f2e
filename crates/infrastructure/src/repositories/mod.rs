pub mod sqlite_activity_repository;
pub mod sqlite_torrent_repository;

pub use sqlite_activity_repository::SqliteActivityRepository;
pub use sqlite_torrent_repository::SqliteTorrentRepository;
