use crate::entities::{ActivityBreakdown, ActivitySample, DayBucket};
use chrono::{DateTime, NaiveDate, TimeZone, Timelike};
use std::collections::HashMap;

/// Upper bound accepted for a reporting window.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Splits a torrent's cumulative upload history into per-day upload deltas.
///
/// Buckets cover `today` back through `window_days - 1` days, or back to the
/// day the torrent was added if that is more recent, oldest first. Calendar
/// days are taken in the time zone of `now`.
///
/// `activity` must be sorted by timestamp ascending. Unsorted input produces
/// meaningless buckets rather than an error, and a non-monotonic `uploaded`
/// series can produce negative buckets, which are kept as they are.
pub fn aggregate<Tz: TimeZone>(
    added_on: i64,
    activity: &[ActivitySample],
    window_days: u32,
    now: &DateTime<Tz>,
) -> ActivityBreakdown {
    let tz = now.timezone();
    let added_day = calendar_day(added_on, &tz);
    let days = tracked_days(now.date_naive(), added_day, window_days);

    let mut samples_by_day: HashMap<NaiveDate, Vec<&ActivitySample>> =
        days.iter().map(|day| (*day, Vec::new())).collect();

    // Newest first. History older than the window is never scanned.
    for sample in activity.iter().rev() {
        let Some(day) = sample_day(sample.timestamp, &tz) else {
            break;
        };
        match samples_by_day.get_mut(&day) {
            Some(samples) => samples.push(sample),
            None => break,
        }
    }

    let mut per_day = Vec::with_capacity(days.len());
    let mut previous_closing: Option<i64> = None;
    let mut total = 0;

    for date in days {
        let samples = samples_by_day.remove(&date).unwrap_or_default();
        let mut uploaded = 0;

        // Samples were collected newest first: the head closes the day, the tail opens it.
        if let (Some(closing), Some(opening)) = (samples.first(), samples.last()) {
            uploaded = if Some(date) == added_day {
                closing.uploaded
            } else {
                let carry = previous_closing.map_or(0, |previous| opening.uploaded - previous);
                closing.uploaded - opening.uploaded + carry
            };
            previous_closing = Some(closing.uploaded);
        }

        total += uploaded;
        per_day.push(DayBucket { date, uploaded });
    }

    ActivityBreakdown { per_day, total }
}

/// Day keys from `today` backward, returned oldest first.
fn tracked_days(today: NaiveDate, added_day: Option<NaiveDate>, window_days: u32) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = today;

    while days.len() < window_days as usize && added_day.map_or(true, |added| day >= added) {
        days.push(day);
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }

    days.reverse();
    days
}

fn calendar_day<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(tz).date_naive())
}

/// A sample stamped within 00:00 (hour and minute zero) closes the previous day.
fn sample_day<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<NaiveDate> {
    let local = DateTime::from_timestamp(timestamp, 0)?.with_timezone(tz);
    let day = local.date_naive();
    if local.hour() == 0 && local.minute() == 0 {
        day.pred_opt()
    } else {
        Some(day)
    }
}
