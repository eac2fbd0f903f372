use crate::model::id::{EventId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub event_id: EventId,
    pub owner_user_id: UserId,
    pub event_name: String,
    pub venue: String,
    pub date_time: DateTime<Utc>,
    pub value: f64,
    pub status: String,
    pub description: String,
}
