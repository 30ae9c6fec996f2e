use crate::entities::ActivitySample;
use serde::{Deserialize, Serialize};

/// A torrent as cached in the `torrents` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Torrent {
    pub hash: String,        // Content hash, unique key
    pub name: String,
    pub size: i64,           // Total size in bytes
    pub added_on: i64,       // Unix seconds
    pub last_activity: i64,  // Unix seconds
}

impl Torrent {
    pub fn new(hash: String, name: String, size: i64, added_on: i64, last_activity: i64) -> Self {
        Self {
            hash,
            name,
            size,
            added_on,
            last_activity,
        }
    }
}

/// A cached torrent joined with its activity history, as served by `GET /stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentStats {
    #[serde(flatten)]
    pub torrent: Torrent,
    pub activity: Vec<ActivitySample>,
}

impl TorrentStats {
    pub fn new(torrent: Torrent, activity: Vec<ActivitySample>) -> Self {
        Self { torrent, activity }
    }

    /// Newest recorded sample, if any.
    pub fn last_change(&self) -> Option<&ActivitySample> {
        self.activity.last()
    }
}

/// Live torrent state as reported by the upstream client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentSnapshot {
    pub hash: String,
    pub name: String,
    pub size: i64,
    pub added_on: i64,
    pub last_activity: i64,
    pub uploaded: i64,       // Cumulative bytes uploaded
    pub time_active: i64,    // Seconds
}

impl TorrentSnapshot {
    pub fn to_torrent(&self) -> Torrent {
        Torrent::new(
            self.hash.clone(),
            self.name.clone(),
            self.size,
            self.added_on,
            self.last_activity,
        )
    }

    /// Activity sample stamped with the snapshot's last activity time.
    pub fn to_sample(&self) -> ActivitySample {
        ActivitySample::new(self.last_activity, self.uploaded, self.time_active)
    }
}
