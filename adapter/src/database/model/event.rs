use chrono::{DateTime, Utc};
use kernel::model::{
    event::Event,
    id::{EventId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub owner_user_id: UserId,
    pub event_name: String,
    pub venue: String,
    pub date_time: DateTime<Utc>,
    pub value: f64,
    pub status: String,
    pub description: String,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            owner_user_id,
            event_name,
            venue,
            date_time,
            value,
            status,
            description,
        } = value;
        Event {
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
