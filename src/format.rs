//! Display formatting helpers

use chrono::{DateTime, NaiveDate, Utc};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size with at most two decimals: `0 Bytes`, `1.5 KB`, `2 MB`
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// "3d ago", "5h ago", "12m ago" or "Just now"
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    if diff.num_days() > 0 {
        format!("{}d ago", diff.num_days())
    } else if diff.num_hours() > 0 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_minutes() > 0 {
        format!("{}m ago", diff.num_minutes())
    } else {
        "Just now".to_string()
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

/// Whole percent of a 0..=1 score
pub fn percent(score: f64) -> u32 {
    (score * 100.0).round().clamp(0.0, 100.0) as u32
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn test_relative_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 18, 12, 0, 0).unwrap();
        assert_eq!(format_relative(now - Duration::days(3), now), "3d ago");
        assert_eq!(format_relative(now - Duration::hours(25), now), "1d ago");
        assert_eq!(format_relative(now - Duration::hours(5), now), "5h ago");
        assert_eq!(format_relative(now - Duration::minutes(12), now), "12m ago");
        assert_eq!(format_relative(now - Duration::seconds(59), now), "Just now");
        // Clock skew
        assert_eq!(format_relative(now + Duration::minutes(5), now), "Just now");
    }

    #[test]
    fn test_percent_and_plural() {
        assert_eq!(percent(0.954), 95);
        assert_eq!(percent(0.455), 46);
        assert_eq!(pluralize(1, "document", "documents"), "1 document");
        assert_eq!(pluralize(0, "document", "documents"), "0 documents");
    }

    #[test]
    fn test_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(d), "Mar 5, 2024");
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 0).unwrap();
        assert_eq!(format_datetime(ts), "Mar 15, 2024 09:05");
    }
}
