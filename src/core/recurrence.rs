//! Recurring-event expansion.
//!
//! A recurring template is expanded once, at creation time, into a fixed
//! batch of future occurrences. Nothing links the siblings afterwards:
//! no series editing, no horizon extension.

use crate::errors::{AppError, AppResult};
use crate::models::Recurrence;
use chrono::{Days, Months, NaiveDate};

/// Number of occurrences generated beyond the template itself.
pub const HORIZON: usize = 6;

/// Advance `anchor` by `n` steps of the pattern, calendar-aware.
/// A monthly step clamps to the target month's last day (Jan 31 → Feb 28).
pub fn advance(anchor: NaiveDate, pattern: Recurrence, n: u32) -> Option<NaiveDate> {
    match pattern {
        Recurrence::Daily => anchor.checked_add_days(Days::new(n as u64)),
        Recurrence::Weekly => anchor.checked_add_days(Days::new(7 * n as u64)),
        Recurrence::Monthly => anchor.checked_add_months(Months::new(n)),
    }
}

/// The dates of the 6 generated occurrences, in order (1x..6x the step).
pub fn occurrence_dates(anchor: NaiveDate, pattern: Recurrence) -> AppResult<Vec<NaiveDate>> {
    let mut out = Vec::with_capacity(HORIZON);

    for n in 1..=HORIZON as u32 {
        let d = advance(anchor, pattern, n)
            .ok_or_else(|| AppError::InvalidDate(format!("{anchor} +{n} {}", pattern.code())))?;
        out.push(d);
    }

    Ok(out)
}
