use crate::entities::{SortField, SortOrder, TorrentStats, TorrentSummary, WindowStats};
use crate::format::round_ratio;
use crate::services::activity_aggregator::aggregate;
use chrono::{DateTime, TimeZone};

/// Builds the table row for a torrent, with upload totals over `window_days`.
pub fn summarize<Tz: TimeZone>(stats: &TorrentStats, window_days: u32, now: &DateTime<Tz>) -> TorrentSummary {
    let torrent = &stats.torrent;
    let (uploaded, time_active) = stats
        .last_change()
        .map_or((0, 0), |sample| (sample.uploaded, sample.time_active));
    let bytes = aggregate(torrent.added_on, &stats.activity, window_days, now).total;

    TorrentSummary {
        hash: torrent.hash.clone(),
        name: torrent.name.clone(),
        size: torrent.size,
        uploaded,
        time_active,
        added_on: torrent.added_on,
        last_activity: torrent.last_activity,
        window: WindowStats {
            days: window_days,
            bytes,
            ratio: round_ratio(bytes, torrent.size),
        },
    }
}

/// Stable sort: rows that compare equal keep their relative order.
pub fn sort_summaries(rows: &mut [TorrentSummary], field: SortField, order: SortOrder) {
    rows.sort_by(|a, b| order.apply(field.compare(a, b)));
}
