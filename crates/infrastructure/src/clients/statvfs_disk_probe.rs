use async_trait::async_trait;
use domain::{DiskProbe, DiskUsage, DomainError};
use std::path::{Path, PathBuf};

/// Reads filesystem usage with `statvfs(3)`.
#[derive(Debug, Default)]
pub struct StatvfsDiskProbe;

impl StatvfsDiskProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DiskProbe for StatvfsDiskProbe {
    async fn usage(&self, path: &Path) -> Result<DiskUsage, DomainError> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || stat_path(path))
            .await
            .map_err(|e| DomainError::DiskError(e.to_string()))?
    }
}

#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
fn stat_path(path: PathBuf) -> Result<DiskUsage, DomainError> {
    let stat = nix::sys::statvfs::statvfs(&path)
        .map_err(|e| DomainError::DiskError(format!("{}: {}", path.display(), e)))?;

    Ok(DiskUsage::from_blocks(
        path,
        stat.blocks() as u64,
        stat.blocks_free() as u64,
        stat.blocks_available() as u64,
        stat.fragment_size() as u64,
    ))
}

#[cfg(not(unix))]
fn stat_path(path: PathBuf) -> Result<DiskUsage, DomainError> {
    Err(DomainError::DiskError(format!(
        "{}: disk usage is only available on unix",
        path.display()
    )))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_usage_for_existing_directory() {
        let dir = tempfile::tempdir().unwrap();

        let usage = StatvfsDiskProbe::new().usage(dir.path()).await.unwrap();

        assert_eq!(usage.path, dir.path());
        assert!(usage.size > 0);
        assert_eq!(usage.used + usage.free, usage.size);
    }

    #[tokio::test]
    async fn missing_path_is_a_disk_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let result = StatvfsDiskProbe::new().usage(&missing).await;

        assert!(matches!(result, Err(DomainError::DiskError(_))));
    }
}
