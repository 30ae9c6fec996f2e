//! Human readable labels for byte counts, durations and ratios.

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with base-1024 units and at most two decimals.
///
/// ```
/// assert_eq!(domain::format::format_bytes(1536), "1.5 KB");
/// ```
pub fn format_bytes(bytes: i64) -> String {
    let mut value = bytes.unsigned_abs() as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let sign = if bytes < 0 { "-" } else { "" };
    format!("{}{} {}", sign, trim_decimals(value), BYTE_UNITS[unit])
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Formats a number of seconds as `1d 4h`, `3h 20s`, `12m 5s` and so on.
///
/// Minutes are dropped once the value spans days, and seconds once it spans
/// hours.
pub fn format_duration(secs: i64) -> String {
    if secs <= 0 {
        return "A moment ago".to_string();
    }

    let seconds = secs % 60;
    let minutes = (secs / 60) % 60;
    let hours = (secs / 3600) % 24;
    let days = secs / 86_400;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if days == 0 && minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if hours == 0 && seconds > 0 {
        parts.push(format!("{}s", seconds));
    }
    parts.join(" ")
}

/// Time elapsed between `since` and `now`, both unix seconds.
pub fn format_elapsed(since: i64, now: i64) -> String {
    let secs = now - since;
    if secs <= 0 {
        return "A moment ago".to_string();
    }
    format!("{} ago", format_duration(secs))
}

/// Upload ratio rounded to two decimals; zero for an empty torrent.
pub fn round_ratio(bytes: i64, size: i64) -> f64 {
    if size <= 0 {
        return 0.0;
    }
    ((bytes as f64 / size as f64) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_one_kilobyte_stay_in_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn bytes_scale_up_and_trim_trailing_zeros() {
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(1_288_490_189), "1.2 GB");
        assert_eq!(format_bytes(5 * 1024_i64.pow(4)), "5 TB");
    }

    #[test]
    fn bytes_cap_at_terabytes() {
        assert_eq!(format_bytes(2048 * 1024_i64.pow(4)), "2048 TB");
    }

    #[test]
    fn negative_bytes_keep_their_sign() {
        assert_eq!(format_bytes(-2048), "-2 KB");
    }

    #[test]
    fn duration_drops_minor_units() {
        assert_eq!(format_duration(0), "A moment ago");
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(3600 + 60 + 1), "1h 1m");
        assert_eq!(format_duration(2 * 86_400 + 3600 + 61), "2d 1h");
        assert_eq!(format_duration(86_400 + 30), "1d 30s");
    }

    #[test]
    fn elapsed_appends_suffix() {
        assert_eq!(format_elapsed(1_000, 1_090), "1m 30s ago");
        assert_eq!(format_elapsed(1_000, 1_000), "A moment ago");
        assert_eq!(format_elapsed(2_000, 1_000), "A moment ago");
    }

    #[test]
    fn ratio_rounds_to_two_decimals() {
        assert_eq!(round_ratio(1, 3), 0.33);
        assert_eq!(round_ratio(2, 3), 0.67);
        assert_eq!(round_ratio(3_000, 1_000), 3.0);
        assert_eq!(round_ratio(100, 0), 0.0);
    }
}
