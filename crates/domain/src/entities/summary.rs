use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Upload totals over the trailing window of days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    pub days: u32,
    pub bytes: i64,
    pub ratio: f64,
}

/// One row of the torrents table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentSummary {
    pub hash: String,
    pub name: String,
    pub size: i64,
    pub uploaded: i64,
    pub time_active: i64,
    pub added_on: i64,
    pub last_activity: i64,
    pub window: WindowStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Size,
    Uploaded,
    WindowBytes,
    WindowRatio,
    TimeActive,
    #[default]
    AddedOn,
    LastActivity,
}

impl SortField {
    /// Ascending comparison of two rows on this field.
    pub fn compare(&self, a: &TorrentSummary, b: &TorrentSummary) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Size => a.size.cmp(&b.size),
            SortField::Uploaded => a.uploaded.cmp(&b.uploaded),
            SortField::WindowBytes => a.window.bytes.cmp(&b.window.bytes),
            SortField::WindowRatio => a.window.ratio.total_cmp(&b.window.ratio),
            SortField::TimeActive => a.time_active.cmp(&b.time_active),
            SortField::AddedOn => a.added_on.cmp(&b.added_on),
            SortField::LastActivity => a.last_activity.cmp(&b.last_activity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}
