use crate::errors::DomainError;
use crate::format::{format_bytes, format_duration, format_elapsed};
use crate::gateways::TorrentClient;
use crate::repositories::{ActivityRepository, TorrentRepository};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of one sampling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SampleReport {
    pub discovered: usize,  // Torrents seen for the first time
    pub sampled: usize,     // Cached torrents with new activity
    pub unchanged: usize,
}

/// Mirrors the torrent client's live state into the cache.
pub struct SamplerService {
    client: Arc<dyn TorrentClient>,
    torrent_repository: Arc<dyn TorrentRepository>,
    activity_repository: Arc<dyn ActivityRepository>,
}

impl SamplerService {
    pub fn new(
        client: Arc<dyn TorrentClient>,
        torrent_repository: Arc<dyn TorrentRepository>,
        activity_repository: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            client,
            torrent_repository,
            activity_repository,
        }
    }

    /// Polls the client once and records a sample for every torrent whose
    /// last activity moved since the previous pass.
    pub async fn sample_once(&self) -> Result<SampleReport, DomainError> {
        let snapshots = self.client.list_torrents().await?;
        debug!("Fetched {} torrents from client", snapshots.len());

        let mut report = SampleReport::default();
        for snapshot in snapshots {
            match self.torrent_repository.find_by_hash(&snapshot.hash).await? {
                Some(cached) if snapshot.last_activity > cached.last_activity => {
                    debug!(
                        "{}: {} uploaded, active {}",
                        snapshot.hash,
                        format_bytes(snapshot.uploaded),
                        format_duration(snapshot.time_active)
                    );
                    self.activity_repository
                        .append(&snapshot.hash, &snapshot.to_sample())
                        .await?;
                    self.torrent_repository
                        .update_last_activity(&snapshot.hash, snapshot.last_activity)
                        .await?;
                    report.sampled += 1;
                }
                Some(_) => report.unchanged += 1,
                None => {
                    // Sample first: a torrent is only cached once its opening sample exists.
                    self.activity_repository
                        .append(&snapshot.hash, &snapshot.to_sample())
                        .await?;
                    self.torrent_repository.save(&snapshot.to_torrent()).await?;
                    info!(
                        "📥 Tracking new torrent {} ({}), added {}",
                        snapshot.name,
                        snapshot.hash,
                        format_elapsed(snapshot.added_on, chrono::Utc::now().timestamp())
                    );
                    report.discovered += 1;
                }
            }
        }

        Ok(report)
    }
}
