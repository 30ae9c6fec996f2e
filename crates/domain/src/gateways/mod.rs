pub mod disk_probe;
pub mod torrent_client;

pub use disk_probe::DiskProbe;
pub use torrent_client::TorrentClient;
