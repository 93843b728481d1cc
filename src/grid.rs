//! Month grid construction.
//!
//! A calendar view renders whole weeks: the grid for a month starts on the
//! nearest week-start on or before the 1st and ends on the week-end on or
//! after the last day, so it always holds a multiple of 7 cells (28..=42 for
//! real months) and includes leading/trailing days of adjacent months.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::daybind::{deadlines_on_day, events_on_day};
use crate::event::{Event, ProjectDeadlineMarker};

/// One cell of the month grid: a date, its derived display flags, and the
/// events/deadlines bound to that local day.
#[derive(Debug, Clone)]
pub struct MonthGridCell<'a> {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub events: Vec<&'a Event>,
    pub deadlines: Vec<&'a ProjectDeadlineMarker>,
}

/// The ordered dates a calendar view renders for `reference`'s month.
///
/// Pure function of the reference month and week-start convention; length is
/// always a positive multiple of 7.
pub fn month_grid_dates(reference: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let first = reference.with_day(1).unwrap();
    let last = last_of_month(first);

    let lead = first.weekday().days_since(week_start) as i64;
    let grid_start = first - Duration::days(lead);

    let trail = 6 - last.weekday().days_since(week_start) as i64;
    let grid_end = last + Duration::days(trail);

    let mut dates = Vec::with_capacity(42);
    let mut day = grid_start;
    while day <= grid_end {
        dates.push(day);
        day += Duration::days(1);
    }

    debug_assert!(dates.len() % 7 == 0 && (28..=42).contains(&dates.len()));
    dates
}

/// Build the annotated grid for `reference`'s month.
///
/// `today` is an explicit parameter rather than a clock read so the function
/// stays pure and callable on any frame with stale or fresh data.
pub fn build_month_grid<'a>(
    reference: NaiveDate,
    week_start: Weekday,
    today: NaiveDate,
    events: &'a [Event],
    deadlines: &'a [ProjectDeadlineMarker],
) -> Vec<MonthGridCell<'a>> {
    month_grid_dates(reference, week_start)
        .into_iter()
        .map(|date| MonthGridCell {
            in_current_month: date.year() == reference.year() && date.month() == reference.month(),
            is_today: date == today,
            events: events_on_day(events, date),
            deadlines: deadlines_on_day(deadlines, date),
            date,
        })
        .collect()
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next_first.unwrap() - Duration::days(1)
}
