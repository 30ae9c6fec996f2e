//! In-memory repositories and a scripted torrent client for service tests.

use crate::entities::{ActivitySample, DiskUsage, Torrent, TorrentSnapshot};
use crate::errors::DomainError;
use crate::gateways::{DiskProbe, TorrentClient};
use crate::repositories::{ActivityRepository, TorrentRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryTorrentRepository {
    pub torrents: Mutex<Vec<Torrent>>,
}

#[async_trait]
impl TorrentRepository for InMemoryTorrentRepository {
    async fn find_all(&self) -> Result<Vec<Torrent>, DomainError> {
        Ok(self.torrents.lock().unwrap().clone())
    }

    async fn find_by_hash(&self, hash: &str) -> Result<Option<Torrent>, DomainError> {
        Ok(self
            .torrents
            .lock()
            .unwrap()
            .iter()
            .find(|torrent| torrent.hash == hash)
            .cloned())
    }

    async fn save(&self, torrent: &Torrent) -> Result<Torrent, DomainError> {
        self.torrents.lock().unwrap().push(torrent.clone());
        Ok(torrent.clone())
    }

    async fn update_last_activity(&self, hash: &str, last_activity: i64) -> Result<(), DomainError> {
        let mut torrents = self.torrents.lock().unwrap();
        let torrent = torrents
            .iter_mut()
            .find(|torrent| torrent.hash == hash)
            .ok_or_else(|| DomainError::TorrentNotFound(hash.to_string()))?;
        torrent.last_activity = last_activity;
        Ok(())
    }

    async fn delete(&self, hash: &str) -> Result<usize, DomainError> {
        let mut torrents = self.torrents.lock().unwrap();
        let before = torrents.len();
        torrents.retain(|torrent| torrent.hash != hash);
        Ok(before - torrents.len())
    }
}

#[derive(Default)]
pub struct InMemoryActivityRepository {
    pub samples: Mutex<HashMap<String, Vec<ActivitySample>>>,
    /// Number of upcoming `append` calls that fail as if the database were locked.
    pub failing_appends: Mutex<usize>,
    pub failing_deletes: Mutex<bool>,
}

impl InMemoryActivityRepository {
    pub fn fail_next_appends(&self, count: usize) {
        *self.failing_appends.lock().unwrap() = count;
    }

    pub fn set_failing_deletes(&self, fail: bool) {
        *self.failing_deletes.lock().unwrap() = fail;
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_by_hash(&self, hash: &str) -> Result<Vec<ActivitySample>, DomainError> {
        Ok(self
            .samples
            .lock()
            .unwrap()
            .get(hash)
            .cloned()
            .unwrap_or_default())
    }

    async fn append(&self, hash: &str, sample: &ActivitySample) -> Result<(), DomainError> {
        {
            let mut failing = self.failing_appends.lock().unwrap();
            if *failing > 0 {
                *failing -= 1;
                return Err(DomainError::RepositoryError("database is locked".to_string()));
            }
        }
        self.samples
            .lock()
            .unwrap()
            .entry(hash.to_string())
            .or_default()
            .push(*sample);
        Ok(())
    }

    async fn delete_by_hash(&self, hash: &str) -> Result<usize, DomainError> {
        if *self.failing_deletes.lock().unwrap() {
            return Err(DomainError::RepositoryError("database is locked".to_string()));
        }
        Ok(self
            .samples
            .lock()
            .unwrap()
            .remove(hash)
            .map_or(0, |samples| samples.len()))
    }
}

#[derive(Default)]
pub struct FakeTorrentClient {
    pub torrents: Mutex<Vec<TorrentSnapshot>>,
    pub deleted: Mutex<Vec<(String, bool)>>,
    pub fail: Mutex<bool>,
}

impl FakeTorrentClient {
    pub fn with_torrents(torrents: Vec<TorrentSnapshot>) -> Self {
        Self {
            torrents: Mutex::new(torrents),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn check(&self) -> Result<(), DomainError> {
        if *self.fail.lock().unwrap() {
            return Err(DomainError::UpstreamError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TorrentClient for FakeTorrentClient {
    async fn list_torrents(&self) -> Result<Vec<TorrentSnapshot>, DomainError> {
        self.check()?;
        Ok(self.torrents.lock().unwrap().clone())
    }

    async fn delete_torrent(&self, hash: &str, delete_files: bool) -> Result<(), DomainError> {
        self.check()?;
        self.deleted
            .lock()
            .unwrap()
            .push((hash.to_string(), delete_files));
        Ok(())
    }

    async fn version(&self) -> Result<String, DomainError> {
        self.check()?;
        Ok("v4.6.2".to_string())
    }
}

pub struct FixedDiskProbe;

#[async_trait]
impl DiskProbe for FixedDiskProbe {
    async fn usage(&self, path: &Path) -> Result<DiskUsage, DomainError> {
        if !path.starts_with("/") {
            return Err(DomainError::DiskError(format!("{} is not absolute", path.display())));
        }
        Ok(DiskUsage::from_blocks(path.to_path_buf(), 100, 40, 30, 1024))
    }
}

pub fn snapshot(hash: &str, last_activity: i64, uploaded: i64) -> TorrentSnapshot {
    TorrentSnapshot {
        hash: hash.to_string(),
        name: format!("{}.iso", hash),
        size: 1_000,
        added_on: 1_700_000_000,
        last_activity,
        uploaded,
        time_active: 3_600,
    }
}
