//! Module for handling export timestamp parsing.

use chrono::{DateTime, Utc};

/// Timestamp format used by the health export, local time with UTC offset
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Parse an export timestamp and convert it to UTC
#[must_use]
pub fn parse_export_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw.trim(), EXPORT_TIMESTAMP_FORMAT)
        .ok()
        .map(|time| time.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn offset_timestamps_convert_to_utc() {
        let time = parse_export_timestamp("2019-12-31 23:10:00 -0800").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2020, 1, 1, 7, 10, 0).unwrap());
    }

    #[test]
    fn utc_timestamps_pass_through() {
        let time = parse_export_timestamp("2020-06-01 12:00:00 +0000").unwrap();
        assert_eq!(time, Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn bad_timestamps_are_rejected() {
        assert!(parse_export_timestamp("2020-06-01T12:00:00Z").is_none());
        assert!(parse_export_timestamp("not a date").is_none());
        assert!(parse_export_timestamp("").is_none());
    }
}
