//! FIX UTCTimestamp formatting.

use chrono::{DateTime, NaiveDateTime, Utc};

/// UTCTimestamp with millisecond precision: `YYYYMMDD-HH:MM:SS.sss`.
pub const UTC_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H:%M:%S%.3f";

const UTC_TIMESTAMP_SECONDS_FORMAT: &str = "%Y%m%d-%H:%M:%S";

/// Render a timestamp as a FIX UTCTimestamp.
#[must_use]
pub fn format_utc_timestamp(value: &DateTime<Utc>) -> String {
    value.format(UTC_TIMESTAMP_FORMAT).to_string()
}

/// Parse a FIX UTCTimestamp, with or without fractional seconds.
#[must_use]
pub fn parse_utc_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, UTC_TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, UTC_TIMESTAMP_SECONDS_FORMAT))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_milliseconds() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 5).unwrap();
        assert_eq!(format_utc_timestamp(&ts), "20240315-14:30:05.000");
    }

    #[test]
    fn parses_both_precisions() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 5).unwrap();
        assert_eq!(parse_utc_timestamp("20240315-14:30:05"), Some(expected));
        assert_eq!(parse_utc_timestamp("20240315-14:30:05.000"), Some(expected));
    }

    #[test]
    fn rejects_other_text() {
        assert!(parse_utc_timestamp("2024-03-15T14:30:05Z").is_none());
        assert!(parse_utc_timestamp("AAPL").is_none());
    }
}
