//! Wire shapes for the persistence collaborator boundary.
//!
//! The core assumes a single canonical decoded shape on each side of the
//! boundary; sniffing string-vs-parsed payloads belongs to the transport
//! layer, not here.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::event::Event;
use crate::instant::Instant;

/// Create/update request produced by the validator path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub project_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub start_time: Instant,
    pub end_time: Option<Instant>,
    pub location: Option<String>,
    pub all_day: bool,
}

/// Collaborator response to an event fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub success: bool,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub message: Option<String>,
}

impl EventsResponse {
    /// Unwrap the fetched events, classifying a reported failure.
    pub fn into_result(self) -> CalendarResult<Vec<Event>> {
        if self.success {
            Ok(self.events)
        } else {
            Err(failure(self.message))
        }
    }
}

/// Collaborator response to a create/update/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationResponse {
    /// Succeed or surface the collaborator's message verbatim.
    pub fn into_result(self) -> CalendarResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(failure(self.message))
        }
    }
}

// Every reported failure is Transport here; sniffing messages for auth
// flavor would put transport knowledge back in the core. The glue maps its
// own auth failures to `NotAuthenticated` before they reach the form.
fn failure(message: Option<String>) -> CalendarError {
    CalendarError::Transport(message.unwrap_or_else(|| "request failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // --- EventRequest ---

    #[test]
    fn request_serializes_instants_as_numbers() {
        let request = EventRequest {
            project_id: None,
            title: "Planning".to_string(),
            description: None,
            start_time: Instant::from_epoch_seconds(1_741_600_800).unwrap(),
            end_time: None,
            location: None,
            all_day: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "project_id": null,
                "title": "Planning",
                "description": null,
                "start_time": 1_741_600_800,
                "end_time": null,
                "location": null,
                "all_day": false,
            })
        );
    }

    // --- responses ---

    #[test]
    fn events_response_round_trips() {
        let payload = json!({
            "success": true,
            "events": [{
                "id": "abc",
                "project_id": null,
                "title": "Standup",
                "description": null,
                "location": null,
                "start_time": 1_741_600_800,
                "end_time": 1_741_604_400,
                "all_day": false,
            }],
        });

        let response: EventsResponse = serde_json::from_value(payload).unwrap();
        let events = response.into_result().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[0].start_time.epoch_seconds(), 1_741_600_800);
    }

    #[test]
    fn events_response_rejects_pre_epoch_instants() {
        let payload = json!({
            "success": true,
            "events": [{
                "id": "abc",
                "project_id": null,
                "title": "Standup",
                "description": null,
                "location": null,
                "start_time": -5,
                "end_time": null,
                "all_day": false,
            }],
        });

        assert!(serde_json::from_value::<EventsResponse>(payload).is_err());
    }

    #[test]
    fn failed_mutation_surfaces_message_verbatim() {
        let response: MutationResponse =
            serde_json::from_value(json!({ "success": false, "message": "event not found" }))
                .unwrap();
        assert_eq!(
            response.into_result(),
            Err(CalendarError::Transport("event not found".to_string()))
        );
    }

    #[test]
    fn failed_fetch_without_message_gets_a_fallback() {
        let response: EventsResponse =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(
            response.into_result(),
            Err(CalendarError::Transport("request failed".to_string()))
        );
    }
}
