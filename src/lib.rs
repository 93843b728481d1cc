//! Calendar and event scheduling core for the dayframe planner.
//!
//! This crate is a pure library consumed by the UI and the fetch/submit
//! glue. It owns the planner's temporal logic:
//! - `localtime` converts between wire instants (epoch seconds) and local
//!   calendar dates, including all-day boundary defaults
//! - `grid` builds the whole-week month grid a calendar view renders
//! - `daybind` buckets events and project deadlines per local day, with the
//!   compact-cell truncation policy
//! - `validate` and `form` normalize event drafts and enforce end ≥ start
//!   before anything is handed to the persistence collaborator
//!
//! Everything here is synchronous and side-effect free; the async fetch and
//! submit boundary lives in the caller.

pub mod daybind;
pub mod error;
pub mod event;
pub mod form;
pub mod grid;
pub mod instant;
pub mod localtime;
pub mod protocol;
pub mod validate;

pub use error::{CalendarError, CalendarResult};
pub use event::{Event, ProjectDeadlineMarker};
pub use instant::Instant;
