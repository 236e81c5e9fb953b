//! Trend percentage over a date-ordered series.

/// How many of the most recent samples form the "recent" group.
const RECENT_WINDOW: usize = 5;

/// `values` must already be sorted by date, oldest first.
///
/// Splits the series into the most recent (up to 5) samples vs the rest,
/// averages each group and returns the relative change in percent.
/// `None` when there is no older group to compare against, or its average
/// is zero.
pub fn trend_pct(values: &[f64]) -> Option<f64> {
    if values.len() <= 1 {
        return None;
    }

    let split = values.len().saturating_sub(RECENT_WINDOW);
    let (older, recent) = values.split_at(split);

    if older.is_empty() {
        return None;
    }

    let avg = |xs: &[f64]| xs.iter().sum::<f64>() / xs.len() as f64;

    let older_avg = avg(older);
    if older_avg == 0.0 {
        return None;
    }

    Some((avg(recent) - older_avg) / older_avg * 100.0)
}
