//! Event form submission state machine.
//!
//! `Editing -> Invalid` on a failed reactive check, back to `Editing` on any
//! field change; `Editing -> Submitting` when the authoritative check
//! passes; `Submitting -> Success | Failed`. A failed submission leaves the
//! form editable for retry.

use crate::error::{CalendarError, CalendarResult};
use crate::protocol::EventRequest;
use crate::validate::EventDraft;

/// States of the event form.
///
/// Validation is a synchronous, pure computation, so the transient
/// "validating" phase is never observable and has no variant here: `edit`
/// and `submit` move straight from `Editing` to `Invalid` or `Submitting`.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing,
    /// Local validation failed; the message is shown inline and submission
    /// is blocked.
    Invalid(String),
    Submitting,
    Success,
    /// The collaborator rejected the submission; its message verbatim.
    Failed(String),
}

/// The new/edit event form: a draft plus its submission state.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub draft: EventDraft,
    state: FormState,
}

impl EventForm {
    pub fn new(draft: EventDraft) -> Self {
        EventForm {
            draft,
            state: FormState::Editing,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply a field change and run the reactive validation pass.
    ///
    /// Any change returns the form to `Editing` first (also after `Invalid`
    /// or `Failed`), then the inline warning is recomputed from the same
    /// algorithm the submit path uses.
    pub fn edit(&mut self, change: impl FnOnce(&mut EventDraft)) {
        change(&mut self.draft);
        self.state = match self.draft.to_request() {
            Ok(_) => FormState::Editing,
            Err(e) => FormState::Invalid(e.to_string()),
        };
    }

    /// Authoritative check at submit time: hand back the normalized request
    /// or block with the inline error.
    pub fn submit(&mut self) -> CalendarResult<EventRequest> {
        match self.draft.to_request() {
            Ok(request) => {
                self.state = FormState::Submitting;
                Ok(request)
            }
            Err(e) => {
                self.state = FormState::Invalid(e.to_string());
                Err(e)
            }
        }
    }

    /// Record the collaborator's verdict for the in-flight submission.
    pub fn resolve(&mut self, outcome: Result<(), CalendarError>) {
        self.state = match outcome {
            Ok(()) => FormState::Success,
            Err(e) => FormState::Failed(e.to_string()),
        };
    }
}
