use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the `activity` table.
///
/// `uploaded` is cumulative since the torrent was added and never resets, so
/// per-day figures have to be derived by subtracting samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySample {
    pub timestamp: i64,
    pub uploaded: i64,
    pub time_active: i64,
}

impl ActivitySample {
    pub fn new(timestamp: i64, uploaded: i64, time_active: i64) -> Self {
        Self {
            timestamp,
            uploaded,
            time_active,
        }
    }
}

/// Upload delta attributed to one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub uploaded: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityBreakdown {
    pub per_day: Vec<DayBucket>,  // Oldest first, ending today
    pub total: i64,
}

/// Day-by-day activity of a single torrent over a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentActivity {
    pub hash: String,
    pub name: String,
    pub size: i64,
    pub window_days: u32,
    #[serde(flatten)]
    pub breakdown: ActivityBreakdown,
    pub ratio: f64,
}
