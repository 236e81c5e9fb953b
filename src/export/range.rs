// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid("start and end must have the same format"));
        }

        let (s1, _) = parse_single(start)?;
        let (_, e2) = parse_single(end)?;

        if e2 < s1 {
            return Err(invalid("range end is before range start"));
        }

        Ok((s1, e2))
    } else {
        parse_single(r.trim())
    }
}

/// Expand one expression into its inclusive (first, last) day pair.
fn parse_single(expr: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match expr.len() {
        // YYYY
        4 => {
            let y: i32 = expr.parse().map_err(|_| invalid("invalid year"))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year"))?;
            let last =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year"))?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let y: i32 = expr[0..4].parse().map_err(|_| invalid("invalid year"))?;
            let m: u32 = expr[5..7].parse().map_err(|_| invalid("invalid month"))?;
            let day = month_last_day(y, m).ok_or_else(|| invalid("invalid month"))?;

            let first =
                NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid("invalid month"))?;
            let last =
                NaiveDate::from_ymd_opt(y, m, day).ok_or_else(|| invalid("invalid month"))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(expr, "%Y-%m-%d")
                .map_err(|_| invalid("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported --range format")),
    }
}

fn invalid(msg: &str) -> AppError {
    AppError::Validation(format!("--range: {msg}"))
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn single_year_spans_whole_year() {
        assert_eq!(parse_range("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
    }

    #[test]
    fn single_month_honors_leap_february() {
        assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
        assert_eq!(parse_range("2025-02").unwrap(), (d("2025-02-01"), d("2025-02-28")));
    }

    #[test]
    fn interval_uses_start_of_first_and_end_of_last() {
        assert_eq!(
            parse_range("2024-11:2025-02").unwrap(),
            (d("2024-11-01"), d("2025-02-28"))
        );
    }

    #[test]
    fn mixed_or_inverted_intervals_are_rejected() {
        assert!(parse_range("2024:2025-02").is_err());
        assert!(parse_range("2025-03:2025-01").is_err());
        assert!(parse_range("yesterday").is_err());
    }
}
