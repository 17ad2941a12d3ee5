//! Date parsing and display formatting.
//!
//! Resume periods are stored as ISO `YYYY-MM-DD` strings and rendered as
//! "MMM yyyy" (e.g. "Aug 2024"). Parsing is strict: a malformed string is an
//! unsupported-input error that aborts generation, carrying the offending
//! input in its message.

use chrono::{Datelike, NaiveDate};

use crate::error::LayoutError;
use crate::locale::Locale;

/// Parse a `YYYY-MM-DD` string into a date.
pub fn parse_date_from_string(value: &str) -> Result<NaiveDate, LayoutError> {
    let invalid = || LayoutError::InvalidDate(value.to_string());

    let mut parts = value.split('-');
    let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() || year < 1 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NL_MONTHS: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Format a date as "MMM yyyy" in the given locale.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let months = match locale {
        Locale::En => &EN_MONTHS,
        Locale::Nl => &NL_MONTHS,
    };
    format!("{} {}", months[date.month0() as usize], date.year())
}

/// Parse and format in one step, for callers holding the raw stored string.
pub fn format_date_from_string(value: &str, locale: Locale) -> Result<String, LayoutError> {
    Ok(format_date(parse_date_from_string(value)?, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let date = parse_date_from_string("2024-08-01").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month0(), 7);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_date_from_string("invalid-date").unwrap_err();
        assert!(err.to_string().contains("invalid-date"));
    }

    #[test]
    fn rejects_month_out_of_range() {
        let err = parse_date_from_string("2024-13-01").unwrap_err();
        assert!(err.to_string().contains("2024-13-01"));
    }

    #[test]
    fn rejects_impossible_day() {
        assert!(parse_date_from_string("2023-02-31").is_err());
    }

    #[test]
    fn rejects_trailing_parts() {
        assert!(parse_date_from_string("2024-08-01-05").is_err());
    }

    #[test]
    fn formats_month_and_year() {
        let date = parse_date_from_string("2024-08-01").unwrap();
        assert_eq!(format_date(date, Locale::En), "Aug 2024");
        assert_eq!(format_date(date, Locale::Nl), "aug 2024");
    }

    #[test]
    fn dutch_march_abbreviation() {
        let date = parse_date_from_string("2021-03-15").unwrap();
        assert_eq!(format_date(date, Locale::Nl), "mrt 2021");
    }
}
