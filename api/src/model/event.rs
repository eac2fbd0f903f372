use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    event::{
        event::{CreateEvent, UpdateEvent},
        Event,
    },
    id::{EventId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[garde(skip)]
    pub owner_user_id: UserId,
    #[garde(length(min = 1))]
    pub event_name: String,
    #[garde(length(min = 1))]
    pub venue: String,
    #[garde(skip)]
    pub date_time: DateTime<Utc>,
    #[garde(skip)]
    pub value: Option<f64>,
    #[garde(skip)]
    pub status: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
}

impl From<CreateEventRequest> for CreateEvent {
    fn from(value: CreateEventRequest) -> Self {
        let CreateEventRequest {
            owner_user_id,
            event_name,
            venue,
            date_time,
            value,
            status,
            description,
        } = value;
        CreateEvent {
            owner_user_id,
            event_name,
            venue,
            date_time,
            value: value.unwrap_or(0.0),
            status: status.unwrap_or_else(|| "Confirmed".into()),
            description: description.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub owner_user_id: Option<UserId>,
    pub event_name: Option<String>,
    pub venue: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub value: Option<f64>,
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(new)]
pub struct UpdateEventRequestWithEventId(EventId, UpdateEventRequest);

impl From<UpdateEventRequestWithEventId> for UpdateEvent {
    fn from(value: UpdateEventRequestWithEventId) -> Self {
        let UpdateEventRequestWithEventId(
            event_id,
            UpdateEventRequest {
                owner_user_id,
                event_name,
                venue,
                date_time,
                value,
                status,
                description,
            },
        ) = value;
        UpdateEvent {
            event_id,
            owner_user_id,
            event_name,
            venue,
            date_time,
            value,
            status,
            description,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event_id: EventId,
    pub owner_user_id: UserId,
    pub event_name: String,
    pub venue: String,
    pub date_time: DateTime<Utc>,
    pub value: f64,
    pub status: String,
    pub description: String,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            event_id,
            owner_user_id,
            event_name,
            venue,
            date_time,
            value,
            status,
            description,
        } = value;
        Self {
            event_id,
            owner_user_id,
            event_name,
            venue,
            date_time,
            value,
            status,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn create_request_fills_defaults_for_omitted_fields() {
        let req = CreateEventRequest {
            owner_user_id: UserId::new(),
            event_name: "Reunion".into(),
            venue: "City Hall".into(),
            date_time: Utc.with_ymd_and_hms(2025, 10, 12, 18, 30, 0).unwrap(),
            value: None,
            status: None,
            description: None,
        };

        let event = CreateEvent::from(req);
        assert_eq!(event.value, 0.0);
        assert_eq!(event.status, "Confirmed");
        assert_eq!(event.description, "");
    }

    #[test]
    fn create_request_keeps_supplied_values() {
        let req = CreateEventRequest {
            owner_user_id: UserId::new(),
            event_name: "Reunion".into(),
            venue: "City Hall".into(),
            date_time: Utc.with_ymd_and_hms(2025, 10, 12, 18, 30, 0).unwrap(),
            value: Some(99.5),
            status: Some("Pending".into()),
            description: Some("Bring snacks".into()),
        };

        let event = CreateEvent::from(req);
        assert_eq!(event.value, 99.5);
        assert_eq!(event.status, "Pending");
        assert_eq!(event.description, "Bring snacks");
    }
}
