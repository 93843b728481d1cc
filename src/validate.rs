//! Start/end normalization and the end-after-start invariant.
//!
//! Both the reactive call site (inline warning while the user edits) and the
//! authoritative one (blocking the submit) run [`validate`] itself, so the
//! two can never disagree.

use chrono::NaiveDate;

use crate::error::{CalendarError, CalendarResult};
use crate::instant::Instant;
use crate::localtime::{compose_instant, Boundary};
use crate::protocol::EventRequest;

/// Normalize raw date/time form fields into wire instants, enforcing
/// `end ≥ start`.
///
/// All-day events ignore the time fields entirely: the start anchors to
/// local midnight and the end (when an end date is given) to local
/// end-of-day. For timed events an absent `end_time` with an explicit
/// `end_date` still defaults to end-of-day, not to "no end".
pub fn validate(
    start_date: NaiveDate,
    start_time: Option<&str>,
    end_date: Option<NaiveDate>,
    end_time: Option<&str>,
    all_day: bool,
) -> CalendarResult<(Instant, Option<Instant>)> {
    let start = compose_instant(
        start_date,
        if all_day { None } else { start_time },
        Boundary::Start,
    )?;

    let Some(end_date) = end_date else {
        return Ok((start, None));
    };

    let end = compose_instant(
        end_date,
        if all_day { None } else { end_time },
        Boundary::End,
    )?;

    if end < start {
        log::debug!(
            "rejected event range: end {} before start {}",
            end.epoch_seconds(),
            start.epoch_seconds()
        );
        return Err(CalendarError::InvalidRange);
    }

    Ok((start, Some(end)))
}

/// Raw fields of the new/edit event form, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub project_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<String>,
    pub all_day: bool,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start_date: NaiveDate) -> Self {
        EventDraft {
            project_id: None,
            title: title.into(),
            description: None,
            location: None,
            start_date,
            start_time: None,
            end_date: None,
            end_time: None,
            all_day: false,
        }
    }

    /// Normalize and check the whole draft, producing the create/update
    /// request for the persistence collaborator.
    pub fn to_request(&self) -> CalendarResult<EventRequest> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CalendarError::EmptyTitle);
        }

        let (start_time, end_time) = validate(
            self.start_date,
            self.start_time.as_deref(),
            self.end_date,
            self.end_time.as_deref(),
            self.all_day,
        )?;

        Ok(EventRequest {
            project_id: self.project_id.clone(),
            title: title.to_string(),
            description: self.description.clone().filter(|d| !d.trim().is_empty()),
            start_time,
            end_time,
            location: self.location.clone().filter(|l| !l.trim().is_empty()),
            all_day: self.all_day,
        })
    }
}
