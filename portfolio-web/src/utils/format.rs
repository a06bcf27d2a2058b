//! # Formatting Utilities
//!
//! Date formatting for timeline, certification, and blog views.
//!
//! ## Functions
//!
//! - [`format_month`] - "January 2023" style month labels
//! - [`format_day`] - "March 5, 2024" style day labels
//! - [`date_range`] - start/end range with "Present" for ongoing entries
//! - [`cert_date_info`] - issue/expiry line for certification cards

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Format a date as month and year, e.g. "January 2023".
pub fn format_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Format a date with its day, e.g. "March 5, 2024".
pub fn format_day(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

/// Day-level label for a timestamp.
pub fn format_datetime_day(ts: NaiveDateTime) -> String {
    format_day(ts.date())
}

/// Month-level range for timeline entries. `current` wins over `end`.
pub fn date_range(start: Option<NaiveDate>, end: Option<NaiveDate>, current: bool) -> String {
    let start = start.map(format_month).unwrap_or_default();
    let end = if current {
        "Present".to_string()
    } else {
        end.map(format_month).unwrap_or_default()
    };
    format!("{} - {}", start, end)
}

/// Issue/expiry line for certification cards.
pub fn cert_date_info(issue: Option<NaiveDate>, expiry: Option<NaiveDate>) -> String {
    let issued = issue.map(format_month).unwrap_or_default();
    match expiry {
        Some(date) => format!("Issued: {} \u{2022} Expires: {}", issued, format_month(date)),
        None => format!("Issued: {}", issued),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month(date(2023, 1, 15)), "January 2023");
        assert_eq!(format_month(date(2024, 12, 1)), "December 2024");
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(date(2024, 3, 5)), "March 5, 2024");
    }

    #[test]
    fn test_date_range_current_wins() {
        let range = date_range(Some(date(2023, 1, 1)), Some(date(2024, 6, 1)), true);
        assert_eq!(range, "January 2023 - Present");
    }

    #[test]
    fn test_date_range_completed() {
        let range = date_range(Some(date(2022, 6, 1)), Some(date(2022, 12, 31)), false);
        assert_eq!(range, "June 2022 - December 2022");
    }

    #[test]
    fn test_date_range_missing_dates() {
        assert_eq!(date_range(None, None, false), " - ");
    }

    #[test]
    fn test_cert_date_info() {
        assert_eq!(
            cert_date_info(Some(date(2022, 1, 1)), None),
            "Issued: January 2022"
        );
        assert_eq!(
            cert_date_info(Some(date(2022, 1, 1)), Some(date(2025, 1, 1))),
            "Issued: January 2022 \u{2022} Expires: January 2025"
        );
    }
}
