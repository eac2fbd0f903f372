use crate::model::id::{EventId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new)]
pub struct CreateEvent {
    pub owner_user_id: UserId,
    pub event_name: String,
    pub venue: String,
    pub date_time: DateTime<Utc>,
    pub value: f64,
    pub status: String,
    pub description: String,
}

#[derive(Debug)]
pub struct UpdateEvent {
    pub event_id: EventId,
    pub owner_user_id: Option<UserId>,
    pub event_name: Option<String>,
    pub venue: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub value: Option<f64>,
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct DeleteEvent {
    pub event_id: EventId,
}
