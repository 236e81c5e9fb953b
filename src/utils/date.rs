//! Date utilities: canonical YYYY-MM-DD parsing, period expansion and
//! calendar-week bounds.
//!
//! Every date that reaches a store is a `NaiveDate`; serde renders it in the
//! canonical `YYYY-MM-DD` form, so the persisted snapshots never carry a
//! locale-dependent representation.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict canonical parse ("2025-03-01").
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Normalize user input to a canonical calendar day.
///
/// Accepted forms:
/// - `YYYY-MM-DD`
/// - `DD/MM/YYYY` (locale form used by the entry screens)
/// - RFC 3339 datetime with offset; the calendar day is taken in the
///   offset the input was written in, so the same wall-clock day comes
///   back regardless of the machine timezone.
pub fn canonicalize(input: &str) -> AppResult<NaiveDate> {
    let s = input.trim();

    if let Some(d) = parse_date(s) {
        return Ok(d);
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Ok(d);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        // date_naive() keeps the offset's own calendar day
        return Ok(dt.date_naive());
    }

    Err(AppError::InvalidDate(input.to_string()))
}

/// Monday..Sunday bounds of the calendar week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = d.weekday().num_days_from_monday() as i64;
    let monday = d - Duration::days(back);
    (monday, monday + Duration::days(6))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_accepts_iso_and_locale_forms() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(canonicalize("2025-03-01").unwrap(), d);
        assert_eq!(canonicalize("01/03/2025").unwrap(), d);
    }

    #[test]
    fn canonicalize_keeps_the_offset_calendar_day() {
        // Same instant, three offsets: each round-trips to the day the
        // user actually wrote.
        assert_eq!(
            canonicalize("2025-03-01T23:30:00-03:00").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert_eq!(
            canonicalize("2025-03-02T02:30:00Z").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
        assert_eq!(
            canonicalize("2025-03-02T11:30:00+09:00").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
    }

    #[test]
    fn canonicalize_rejects_garbage() {
        assert!(canonicalize("yesterday").is_err());
        assert!(canonicalize("2025-13-01").is_err());
    }

    #[test]
    fn week_bounds_are_monday_to_sunday() {
        // 2025-03-05 is a Wednesday
        let d = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let (start, end) = week_bounds(d);
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    }
}
