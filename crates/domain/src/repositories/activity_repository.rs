use crate::entities::ActivitySample;
use crate::errors::DomainError;
use async_trait::async_trait;

/// Append-only log of cumulative upload samples per torrent.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Samples for one torrent, ascending by timestamp.
    async fn find_by_hash(&self, hash: &str) -> Result<Vec<ActivitySample>, DomainError>;
    async fn append(&self, hash: &str, sample: &ActivitySample) -> Result<(), DomainError>;
    /// Returns the number of rows removed.
    async fn delete_by_hash(&self, hash: &str) -> Result<usize, DomainError>;
}
