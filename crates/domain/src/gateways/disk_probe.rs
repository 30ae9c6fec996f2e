use crate::entities::DiskUsage;
use crate::errors::DomainError;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait DiskProbe: Send + Sync {
    async fn usage(&self, path: &Path) -> Result<DiskUsage, DomainError>;
}
