use crate::entities::TorrentSnapshot;
use crate::errors::DomainError;
use async_trait::async_trait;

/// Control API of the torrent client, the source of truth for live state.
#[async_trait]
pub trait TorrentClient: Send + Sync {
    async fn list_torrents(&self) -> Result<Vec<TorrentSnapshot>, DomainError>;
    async fn delete_torrent(&self, hash: &str, delete_files: bool) -> Result<(), DomainError>;
    async fn version(&self) -> Result<String, DomainError>;
}
