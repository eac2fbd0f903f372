use crate::model::{
    event::{
        event::{CreateEvent, DeleteEvent, UpdateEvent},
        Event,
    },
    id::UserId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: CreateEvent) -> AppResult<Event>;
    // All events owned by the user, ordered ascending by date_time.
    async fn find_by_owner_id(&self, owner_user_id: UserId) -> AppResult<Vec<Event>>;
    // Overwrites only the fields supplied in the event.
    async fn update(&self, event: UpdateEvent) -> AppResult<Event>;
    async fn delete(&self, event: DeleteEvent) -> AppResult<()>;
}
