//! Event and deadline-marker types.
//!
//! Both types are plain decoded records: the transport collaborator owns
//! JSON sniffing and hands the core canonical collections of these.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CalendarError, CalendarResult};
use crate::instant::Instant;
use crate::localtime::{compose_instant, to_local_date, Boundary};

/// A calendar event.
///
/// Invariants (enforced by [`Event::new`], not by field access):
/// - `title` is non-empty after trimming
/// - `end_time`, when present, is ≥ `start_time`
/// - all-day events have `start_time` at local midnight of the start date
///   and `end_time` (when present) at local end-of-day of the end date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub project_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub all_day: bool,
}

impl Event {
    /// Build a new event with a fresh id, enforcing the type's invariants.
    pub fn new(
        title: impl Into<String>,
        project_id: Option<String>,
        description: Option<String>,
        location: Option<String>,
        start_time: Instant,
        end_time: Option<Instant>,
        all_day: bool,
    ) -> CalendarResult<Self> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(CalendarError::EmptyTitle);
        }

        // All-day events are re-anchored to local day boundaries regardless
        // of the clock time carried by the incoming instants
        let (start_time, end_time) = if all_day {
            let start = compose_instant(to_local_date(start_time), None, Boundary::Start)?;
            let end = end_time
                .map(|e| compose_instant(to_local_date(e), None, Boundary::End))
                .transpose()?;
            (start, end)
        } else {
            (start_time, end_time)
        };

        if let Some(end) = end_time {
            if end < start_time {
                return Err(CalendarError::InvalidRange);
            }
        }

        Ok(Event {
            id: Uuid::new_v4().to_string(),
            project_id,
            title: title.to_string(),
            description,
            location,
            start_time,
            end_time,
            all_day,
        })
    }
}

/// Read-only projection of a project's deadline, used only for calendar
/// annotation. Never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDeadlineMarker {
    pub project_id: String,
    pub name: String,
    pub end_date: Option<Instant>,
}
