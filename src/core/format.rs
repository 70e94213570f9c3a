//! Display formatting for video metadata
//!
//! Renders duration, view count and publish date the way the confirmation
//! screen presents them before a download.

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::error::{Error, Result};

/// Formats a duration in seconds as `{h}h {m}m {s}s`, omitting leading
/// zero-valued units (a video under a minute shows only seconds).
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Formats a view count with thousands separators (1234567 -> "1,234,567")
pub fn format_views(views: u64) -> String {
    let digits = views.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Strips a trailing `±HH:MM` UTC-offset suffix, if present
fn strip_utc_offset(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 6 {
        let tail = &bytes[bytes.len() - 6..];
        if (tail[0] == b'+' || tail[0] == b'-')
            && tail[1].is_ascii_digit()
            && tail[2].is_ascii_digit()
            && tail[3] == b':'
            && tail[4].is_ascii_digit()
            && tail[5].is_ascii_digit()
        {
            return s[..s.len() - 6].trim_end();
        }
    }
    s
}

/// Renders a publish date as `Month DD YYYY` (e.g. "January 05 2023").
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM` or a date-only string,
/// with an optional trailing UTC offset. A `T` date/time separator is
/// treated as a space since the extractor reports ISO-8601 timestamps.
pub fn format_publish_date(raw: &str) -> Result<String> {
    let normalized = raw.trim().replace('T', " ");
    let cleaned = strip_utc_offset(&normalized);

    let date = if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, "%Y-%m-%d %H:%M:%S") {
        dt.date()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, "%Y-%m-%d %H:%M") {
        dt.date()
    } else {
        let date_part = cleaned.split_whitespace().next().unwrap_or(cleaned);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
            Error::InvalidInput(format!("unrecognized publish date '{raw}': {e}"))
        })?
    };

    Ok(date.format("%B %d %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(60), "1m 0s");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(3725), "1h 2m 5s");
        assert_eq!(format_duration(3600), "1h 0m 0s");
        assert_eq!(format_duration(7322), "2h 2m 2s");
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1000), "1,000");
        assert_eq!(format_views(1234567), "1,234,567");
        assert_eq!(format_views(1000000000), "1,000,000,000");
    }

    #[test]
    fn test_format_publish_date_with_offset() {
        assert_eq!(
            format_publish_date("2023-01-05 10:00:00-07:00").unwrap(),
            "January 05 2023"
        );
        assert_eq!(
            format_publish_date("2023-01-05 10:00:00+00:00").unwrap(),
            "January 05 2023"
        );
    }

    #[test]
    fn test_format_publish_date_date_only() {
        assert_eq!(format_publish_date("2023-01-05").unwrap(), "January 05 2023");
        assert_eq!(format_publish_date("2013-12-25").unwrap(), "December 25 2013");
    }

    #[test]
    fn test_format_publish_date_without_seconds() {
        assert_eq!(
            format_publish_date("2023-01-05 10:00").unwrap(),
            "January 05 2023"
        );
    }

    #[test]
    fn test_format_publish_date_iso_separator() {
        assert_eq!(
            format_publish_date("2023-01-05T10:00:00-07:00").unwrap(),
            "January 05 2023"
        );
        assert_eq!(
            format_publish_date("2013-07-10T00:00:00Z").unwrap(),
            "July 10 2013"
        );
    }

    #[test]
    fn test_format_publish_date_garbage_rejected() {
        assert!(format_publish_date("yesterday").is_err());
        assert!(format_publish_date("").is_err());
        assert!(format_publish_date("05/01/2023").is_err());
    }

    #[test]
    fn test_strip_utc_offset_leaves_plain_dates_alone() {
        assert_eq!(strip_utc_offset("2023-01-05"), "2023-01-05");
        assert_eq!(strip_utc_offset("2023-01-05 10:00:00"), "2023-01-05 10:00:00");
        assert_eq!(strip_utc_offset("2023-01-05 10:00:00-07:00"), "2023-01-05 10:00:00");
    }
}
