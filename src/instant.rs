//! Canonical wire representation for points in time.
//!
//! Every timestamp crossing the collaborator boundary is an `Instant`: whole
//! seconds since the Unix epoch, UTC. Local calendar dates are always derived
//! from an `Instant` on demand (see [`crate::localtime`]), never stored.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Whole seconds since the Unix epoch (UTC).
///
/// Serializes as a plain JSON number; deserialization routes through
/// [`Instant::from_epoch_seconds`] so wire data cannot bypass the
/// non-negativity invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Instant(i64);

impl TryFrom<i64> for Instant {
    type Error = CalendarError;

    fn try_from(secs: i64) -> CalendarResult<Self> {
        Instant::from_epoch_seconds(secs)
    }
}

impl From<Instant> for i64 {
    fn from(instant: Instant) -> i64 {
        instant.0
    }
}

impl Instant {
    /// Build an instant from epoch seconds, rejecting pre-epoch values.
    pub fn from_epoch_seconds(secs: i64) -> CalendarResult<Self> {
        if secs < 0 {
            return Err(CalendarError::InvalidInstant(secs));
        }
        Ok(Instant(secs))
    }

    /// The raw epoch-second count, as sent on the wire.
    pub fn epoch_seconds(self) -> i64 {
        self.0
    }

    /// The current instant.
    pub fn now() -> Self {
        Instant(Utc::now().timestamp())
    }

    /// The instant in the process-local time zone.
    pub(crate) fn to_local(self) -> DateTime<Local> {
        // A UTC timestamp maps onto the local timeline unambiguously
        Local.timestamp_opt(self.0, 0).unwrap()
    }
}
