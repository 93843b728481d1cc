//! Conversions between wire instants and local wall-clock fields.
//!
//! Events and deadlines are stored as epoch seconds, but they are grouped and
//! displayed per *local* calendar day. Every "is this event on this day"
//! comparison goes through local-date decomposition here, never through raw
//! epoch-second truncation, because the user's local day boundaries are what
//! matter for display and because all-day events are anchored to local
//! midnight rather than to an epoch-aligned boundary.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::{CalendarError, CalendarResult};
use crate::instant::Instant;

/// Default applied when a date is composed without a time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Local midnight, 00:00:00.
    Start,
    /// Local end of day. The upstream wire format is whole seconds, so the
    /// conventional 23:59:59.999 is floored to 23:59:59.
    End,
}

/// Decompose an instant into a local calendar date, using the offset in
/// effect at that instant (DST transitions follow the host's local rules).
pub fn to_local_date(instant: Instant) -> NaiveDate {
    instant.to_local().date_naive()
}

/// True iff both instants fall on the same local calendar day.
pub fn same_local_day(a: Instant, b: Instant) -> bool {
    to_local_date(a) == to_local_date(b)
}

/// Combine a local calendar date with an optional "HH:MM" time into an
/// instant. Without a time, the [`Boundary`] default applies.
pub fn compose_instant(
    date: NaiveDate,
    time: Option<&str>,
    boundary: Boundary,
) -> CalendarResult<Instant> {
    let clock = match time {
        Some(t) => parse_time(t)?,
        None => match boundary {
            Boundary::Start => NaiveTime::MIN,
            Boundary::End => NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
        },
    };

    let local = resolve_local(date.and_time(clock));
    Instant::from_epoch_seconds(local.timestamp())
}

/// Parse "HH:MM" into a time with zero seconds.
fn parse_time(time: &str) -> CalendarResult<NaiveTime> {
    let invalid = || CalendarError::InvalidTimeFormat(time.to_string());

    let (h, m) = time.split_once(':').ok_or_else(invalid)?;

    // Digits only; u32::parse alone would also accept a leading '+'
    if !h.chars().all(|c| c.is_ascii_digit()) || !m.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = h.parse().map_err(|_| invalid())?;
    let minute: u32 = m.parse().map_err(|_| invalid())?;

    // Range check [0,23]:[0,59]
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Map a naive local datetime onto the local zone's timeline.
///
/// Ambiguous wall-clock times (fall-back transition) take the earlier
/// offset; nonexistent times (spring-forward gap) shift forward one hour.
fn resolve_local(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            log::debug!("local time {naive} falls in a DST gap, shifting forward one hour");
            Local
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
                .unwrap_or_else(|| Local.from_utc_datetime(&naive))
        }
    }
}
