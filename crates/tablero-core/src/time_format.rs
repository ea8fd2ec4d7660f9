//! Relative durations for feed timestamps ("42s", "7m", "2h 5m").

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::constants::TIME_PLACEHOLDER;

/// Naive layouts accepted after RFC 3339 fails. These carry no offset and are read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp, defaulting naive inputs to UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // Offsets without a colon ("+0000") are not RFC 3339 but show up in practice
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format elapsed seconds as `"{s}s"`, `"{m}m"` or `"{h}h {m}m"`.
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

/// Time elapsed since `timestamp`, relative to `now`.
///
/// Missing, empty and unparsable timestamps all yield [`TIME_PLACEHOLDER`].
/// Timestamps in the future clamp to `"0s"`.
pub fn time_since(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(then) = timestamp.and_then(parse_timestamp) else {
        return TIME_PLACEHOLDER.to_string();
    };

    let elapsed = now.signed_duration_since(then).num_seconds().max(0) as u64;
    format_elapsed(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn ago(secs: i64) -> String {
        (now() - Duration::seconds(secs)).to_rfc3339()
    }

    #[test]
    fn test_missing_and_empty_use_placeholder() {
        assert_eq!(time_since(None, now()), TIME_PLACEHOLDER);
        assert_eq!(time_since(Some(""), now()), TIME_PLACEHOLDER);
        assert_eq!(time_since(Some("   "), now()), TIME_PLACEHOLDER);
    }

    #[test]
    fn test_unparsable_uses_placeholder() {
        assert_eq!(time_since(Some("not-a-date"), now()), TIME_PLACEHOLDER);
        assert_eq!(time_since(Some("2024-13-45T99:00:00Z"), now()), TIME_PLACEHOLDER);
    }

    #[test]
    fn test_seconds() {
        assert_eq!(time_since(Some(&ago(59)), now()), "59s");
        assert_eq!(time_since(Some(&ago(0)), now()), "0s");
    }

    #[test]
    fn test_minutes_truncate() {
        assert_eq!(time_since(Some(&ago(90)), now()), "1m");
        assert_eq!(time_since(Some(&ago(3599)), now()), "59m");
    }

    #[test]
    fn test_hours_with_remainder_minutes() {
        assert_eq!(time_since(Some(&ago(2 * 3600 + 5 * 60)), now()), "2h 5m");
        assert_eq!(time_since(Some(&ago(3600)), now()), "1h 0m");
        assert_eq!(time_since(Some(&ago(26 * 3600 + 59 * 60 + 59)), now()), "26h 59m");
    }

    #[test]
    fn test_zulu_suffix_and_offsets() {
        assert_eq!(time_since(Some("2024-05-10T11:59:30Z"), now()), "30s");
        // 13:58:00+02:00 is 11:58:00 UTC
        assert_eq!(time_since(Some("2024-05-10T13:58:00+02:00"), now()), "2m");
        assert_eq!(time_since(Some("2024-05-10T11:58:00+0000"), now()), "2m");
    }

    #[test]
    fn test_naive_timestamps_are_utc() {
        assert_eq!(time_since(Some("2024-05-10T11:00:00"), now()), "1h 0m");
        assert_eq!(time_since(Some("2024-05-10 11:59:50.250"), now()), "9s");
        assert_eq!(time_since(Some("2024-05-10"), now()), "12h 0m");
    }

    #[test]
    fn test_future_timestamp_clamps_to_zero() {
        assert_eq!(time_since(Some("2024-05-10T12:05:00Z"), now()), "0s");
    }
}
