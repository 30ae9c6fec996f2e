use crate::entities::DiskUsage;
use crate::errors::DomainError;
use crate::gateways::DiskProbe;
use std::path::PathBuf;
use std::sync::Arc;

/// Reports usage of the disks torrents are stored on.
pub struct DiskService {
    probe: Arc<dyn DiskProbe>,
    paths: Vec<PathBuf>,
}

impl DiskService {
    pub fn new(probe: Arc<dyn DiskProbe>, paths: Vec<PathBuf>) -> Self {
        Self { probe, paths }
    }

    /// Usage for every configured path, in configuration order.
    pub async fn usage(&self) -> Result<Vec<DiskUsage>, DomainError> {
        let mut disks = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            disks.push(self.probe.usage(path).await?);
        }
        Ok(disks)
    }
}
