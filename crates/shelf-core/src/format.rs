//! # Display Formatting
//!
//! Date rendering for the Created At / Modified At table columns.

use chrono::{DateTime, TimeZone};

/// Placeholder shown for a record that was never modified.
pub const NEVER: &str = "--";

/// Formats a timestamp like `01 March 2024, 9:30 AM`.
///
/// The caller picks the zone (the dashboard converts to local time).
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%d %B %Y, %-I:%M %p").to_string()
}

/// Formats an optional timestamp, using [`NEVER`] when absent.
pub fn format_optional<Tz>(at: Option<&DateTime<Tz>>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.map(format_timestamp::<Tz>).unwrap_or_else(|| NEVER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(&at), "01 March 2024, 9:30 AM");

        let at = Utc.with_ymd_and_hms(2023, 12, 25, 17, 5, 0).unwrap();
        assert_eq!(format_timestamp(&at), "25 December 2023, 5:05 PM");
    }

    #[test]
    fn test_format_optional_absent() {
        assert_eq!(format_optional::<Utc>(None), "--");
    }
}
