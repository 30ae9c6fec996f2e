pub mod activity_repository;
pub mod torrent_repository;

pub use activity_repository::ActivityRepository;
pub use torrent_repository::TorrentRepository;
