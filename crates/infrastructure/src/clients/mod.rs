pub mod qbittorrent_client;
pub mod statvfs_disk_probe;

pub use qbittorrent_client::QbittorrentClient;
pub use statvfs_disk_probe::StatvfsDiskProbe;
