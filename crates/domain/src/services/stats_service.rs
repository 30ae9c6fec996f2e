use crate::entities::{SortField, SortOrder, TorrentActivity, TorrentStats, TorrentSummary};
use crate::errors::DomainError;
use crate::format::round_ratio;
use crate::gateways::TorrentClient;
use crate::repositories::{ActivityRepository, TorrentRepository};
use crate::services::activity_aggregator::{aggregate, MAX_WINDOW_DAYS};
use crate::services::torrent_table::{sort_summaries, summarize};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Rows removed from the cache by a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    pub hash: String,
    pub torrents_removed: usize,
    pub samples_removed: usize,
}

/// Read side of the cache plus torrent removal.
pub struct StatsService {
    client: Arc<dyn TorrentClient>,
    torrent_repository: Arc<dyn TorrentRepository>,
    activity_repository: Arc<dyn ActivityRepository>,
}

impl StatsService {
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

    /// Every cached torrent joined with its activity history.
    pub async fn list_stats(&self) -> Result<Vec<TorrentStats>, DomainError> {
        let torrents = self.torrent_repository.find_all().await?;

        let mut stats = Vec::with_capacity(torrents.len());
        for torrent in torrents {
            let activity = self.activity_repository.find_by_hash(&torrent.hash).await?;
            stats.push(TorrentStats::new(torrent, activity));
        }
        Ok(stats)
    }

    pub async fn get_stats(&self, hash: &str) -> Result<TorrentStats, DomainError> {
        let torrent = self
            .torrent_repository
            .find_by_hash(hash)
            .await?
            .ok_or_else(|| DomainError::TorrentNotFound(hash.to_string()))?;
        let activity = self.activity_repository.find_by_hash(hash).await?;
        Ok(TorrentStats::new(torrent, activity))
    }

    /// Per-day upload breakdown of one torrent over the last `window_days`.
    pub async fn activity_by_day<Tz: TimeZone>(
        &self,
        hash: &str,
        window_days: u32,
        now: &DateTime<Tz>,
    ) -> Result<TorrentActivity, DomainError> {
        validate_window(window_days)?;
        let stats = self.get_stats(hash).await?;
        let torrent = stats.torrent;
        let breakdown = aggregate(torrent.added_on, &stats.activity, window_days, now);
        let ratio = round_ratio(breakdown.total, torrent.size);

        Ok(TorrentActivity {
            hash: torrent.hash,
            name: torrent.name,
            size: torrent.size,
            window_days,
            breakdown,
            ratio,
        })
    }

    /// Table rows for every cached torrent, sorted.
    pub async fn summaries<Tz: TimeZone>(
        &self,
        window_days: u32,
        field: SortField,
        order: SortOrder,
        now: &DateTime<Tz>,
    ) -> Result<Vec<TorrentSummary>, DomainError> {
        validate_window(window_days)?;
        let stats = self.list_stats().await?;

        let mut rows: Vec<TorrentSummary> = stats
            .iter()
            .map(|torrent| summarize(torrent, window_days, now))
            .collect();
        sort_summaries(&mut rows, field, order);
        Ok(rows)
    }

    /// Removes a torrent and its files from the client, then from the cache.
    ///
    /// The cache is only touched once the client has accepted the delete.
    pub async fn delete_torrent(&self, hash: &str) -> Result<DeleteReport, DomainError> {
        let hash = hash.trim();
        if hash.is_empty() {
            return Err(DomainError::ValidationError("Torrent hash is required".to_string()));
        }

        self.client.delete_torrent(hash, true).await?;
        // Samples are removed before their torrent row.
        let samples_removed = self.activity_repository.delete_by_hash(hash).await?;
        let torrents_removed = self.torrent_repository.delete(hash).await?;

        info!("🗑️  Deleted torrent with hash {}", hash);
        info!("   Rows affected in torrents table: {}", torrents_removed);
        info!("   Rows affected in activity table: {}", samples_removed);

        Ok(DeleteReport {
            hash: hash.to_string(),
            torrents_removed,
            samples_removed,
        })
    }

    pub async fn client_version(&self) -> Result<String, DomainError> {
        self.client.version().await
    }
}

fn validate_window(window_days: u32) -> Result<(), DomainError> {
    if window_days == 0 || window_days > MAX_WINDOW_DAYS {
        return Err(DomainError::ValidationError(format!(
            "Window must be between 1 and {} days, got {}",
            MAX_WINDOW_DAYS, window_days
        )));
    }
    Ok(())
}
