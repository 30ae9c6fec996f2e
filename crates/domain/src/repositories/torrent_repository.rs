use crate::entities::Torrent;
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait TorrentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Torrent>, DomainError>;
    async fn find_by_hash(&self, hash: &str) -> Result<Option<Torrent>, DomainError>;
    async fn save(&self, torrent: &Torrent) -> Result<Torrent, DomainError>;
    async fn update_last_activity(&self, hash: &str, last_activity: i64) -> Result<(), DomainError>;
    /// Returns the number of rows removed.
    async fn delete(&self, hash: &str) -> Result<usize, DomainError>;
}
