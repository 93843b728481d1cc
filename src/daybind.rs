//! Per-day bucketing of events and project deadlines.
//!
//! The grid view filters, it never re-sorts: within a day bucket the input
//! collection's order is preserved (list-view callers pre-sort by start time
//! ascending before binding).

use chrono::NaiveDate;

use crate::event::{Event, ProjectDeadlineMarker};
use crate::instant::Instant;
use crate::localtime::to_local_date;

/// Compact grid cells show at most this many events...
pub const MAX_CELL_EVENTS: usize = 2;
/// ...and at most this many deadlines; the rest become a hidden count.
pub const MAX_CELL_DEADLINES: usize = 1;

/// Events whose start falls on the given local day, input order preserved.
pub fn events_on_day<'a>(events: &'a [Event], date: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| on_day(e.start_time, date))
        .collect()
}

/// Deadline markers with a deadline on the given local day.
pub fn deadlines_on_day<'a>(
    projects: &'a [ProjectDeadlineMarker],
    date: NaiveDate,
) -> Vec<&'a ProjectDeadlineMarker> {
    projects
        .iter()
        .filter(|p| p.end_date.is_some_and(|d| on_day(d, date)))
        .collect()
}

fn on_day(instant: Instant, date: NaiveDate) -> bool {
    to_local_date(instant) == date
}

/// Truncated view of one day's bucket for compact grid-cell display.
///
/// Invariant: nothing is hidden silently; `hidden` always reconciles with
/// the true totals, i.e. `events.len() + deadlines.len() + hidden` equals
/// the day's full event and deadline count.
#[derive(Debug, Clone)]
pub struct DayCellDisplay<'a> {
    pub events: Vec<&'a Event>,
    pub deadlines: Vec<&'a ProjectDeadlineMarker>,
    pub hidden: usize,
}

impl<'a> DayCellDisplay<'a> {
    /// Truncate a day bucket to the compact limits.
    pub fn compact(
        events: Vec<&'a Event>,
        deadlines: Vec<&'a ProjectDeadlineMarker>,
    ) -> DayCellDisplay<'a> {
        let hidden = events.len().saturating_sub(MAX_CELL_EVENTS)
            + deadlines.len().saturating_sub(MAX_CELL_DEADLINES);

        let mut events = events;
        events.truncate(MAX_CELL_EVENTS);
        let mut deadlines = deadlines;
        deadlines.truncate(MAX_CELL_DEADLINES);

        DayCellDisplay {
            events,
            deadlines,
            hidden,
        }
    }

    /// Build the compact display for a day directly from flat collections.
    pub fn for_day(
        events: &'a [Event],
        projects: &'a [ProjectDeadlineMarker],
        date: NaiveDate,
    ) -> DayCellDisplay<'a> {
        DayCellDisplay::compact(events_on_day(events, date), deadlines_on_day(projects, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localtime::{compose_instant, Boundary};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event_at(title: &str, d: NaiveDate, time: &str) -> Event {
        let start = compose_instant(d, Some(time), Boundary::Start).unwrap();
        Event::new(title, None, None, None, start, None, false).unwrap()
    }

    fn deadline(name: &str, d: Option<NaiveDate>) -> ProjectDeadlineMarker {
        ProjectDeadlineMarker {
            project_id: format!("proj-{name}"),
            name: name.to_string(),
            end_date: d.map(|d| compose_instant(d, None, Boundary::End).unwrap()),
        }
    }

    // --- events_on_day ---

    #[test]
    fn filters_by_local_day_preserving_order() {
        let day = date(2025, 5, 20);
        let events = vec![
            event_at("late", day, "22:00"),
            event_at("other day", date(2025, 5, 21), "09:00"),
            event_at("early", day, "07:00"),
        ];

        let bucket = events_on_day(&events, day);
        // Input order, not start-time order
        let titles: Vec<_> = bucket.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["late", "early"]);
    }

    // --- deadlines_on_day ---

    #[test]
    fn skips_projects_without_deadline() {
        let day = date(2025, 5, 20);
        let projects = vec![
            deadline("a", Some(day)),
            deadline("open-ended", None),
            deadline("b", Some(date(2025, 5, 21))),
        ];

        let bucket = deadlines_on_day(&projects, day);
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].name, "a");
    }

    // --- DayCellDisplay ---

    #[test]
    fn compact_reconciles_hidden_with_totals() {
        let day = date(2025, 5, 20);
        let events: Vec<_> = (0..4).map(|i| event_at(&format!("e{i}"), day, "10:00")).collect();
        let projects: Vec<_> = (0..3).map(|i| deadline(&format!("p{i}"), Some(day))).collect();

        let display = DayCellDisplay::for_day(&events, &projects, day);

        assert_eq!(display.events.len(), 2);
        assert_eq!(display.deadlines.len(), 1);
        assert_eq!(display.hidden, 4);
        // shown + hidden == true totals for the day
        assert_eq!(
            display.events.len() + display.deadlines.len() + display.hidden,
            events.len() + projects.len()
        );
        // Truncation keeps the first entries in input order
        assert_eq!(display.events[0].title, "e0");
        assert_eq!(display.events[1].title, "e1");
    }

    #[test]
    fn compact_hides_nothing_under_the_limits() {
        let day = date(2025, 5, 20);
        let events = vec![event_at("only", day, "10:00")];
        let projects = vec![deadline("p", Some(day))];

        let display = DayCellDisplay::for_day(&events, &projects, day);
        assert_eq!(display.events.len(), 1);
        assert_eq!(display.deadlines.len(), 1);
        assert_eq!(display.hidden, 0);
    }

    #[test]
    fn empty_day_is_empty() {
        let display = DayCellDisplay::for_day(&[], &[], date(2025, 5, 20));
        assert!(display.events.is_empty());
        assert!(display.deadlines.is_empty());
        assert_eq!(display.hidden, 0);
    }
}
