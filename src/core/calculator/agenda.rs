//! Agenda filters: pending events and weekly completion counts.

use crate::models::Event;
use crate::utils::date::week_bounds;
use chrono::NaiveDate;

pub fn pending<'a>(events: &'a [Event]) -> Vec<&'a Event> {
    events.iter().filter(|e| !e.completed).collect()
}

/// Events completed within the calendar week containing `reference`.
/// Undated events never count.
pub fn completed_in_week<'a>(events: &'a [Event], reference: NaiveDate) -> Vec<&'a Event> {
    let (start, end) = week_bounds(reference);

    events
        .iter()
        .filter(|e| {
            e.completed
                && e.date
                    .map(|d| d >= start && d <= end)
                    .unwrap_or(false)
        })
        .collect()
}

/// Events scheduled on one specific day, in stored order.
pub fn on_day<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events.iter().filter(|e| e.date == Some(day)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(id: i64, date: Option<&str>, completed: bool) -> Event {
        Event {
            id,
            title: format!("event-{id}"),
            date: date.map(|d| d.parse().unwrap()),
            time: None,
            description: None,
            recurrence: None,
            completed,
            marker_id: None,
        }
    }

    #[test]
    fn weekly_filter_honors_monday_bounds() {
        // 2025-03-05 is a Wednesday; week is 03-03..03-09
        let events = vec![
            ev(1, Some("2025-03-03"), true),
            ev(2, Some("2025-03-09"), true),
            ev(3, Some("2025-03-10"), true),
            ev(4, Some("2025-03-05"), false),
            ev(5, None, true),
        ];

        let reference = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let done = completed_in_week(&events, reference);
        let ids: Vec<i64> = done.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn pending_skips_completed() {
        let events = vec![ev(1, None, true), ev(2, None, false)];
        assert_eq!(pending(&events).len(), 1);
    }
}
