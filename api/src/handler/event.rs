use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    event::event::DeleteEvent,
    id::{EventId, UserId},
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::{
    event::{CreateEventRequest, EventResponse, UpdateEventRequest, UpdateEventRequestWithEventId},
    MessageResponse,
};

pub async fn register_event(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    req.validate(&())?;

    registry
        .event_repository()
        .create(req.into())
        .await
        .map(|event| (StatusCode::CREATED, Json(event.into())))
}

pub async fn show_event_list(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<EventResponse>>> {
    registry
        .event_repository()
        .find_by_owner_id(user_id)
        .await
        .map(|events| events.into_iter().map(EventResponse::from).collect())
        .map(Json)
}

pub async fn update_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateEventRequest>,
) -> AppResult<Json<EventResponse>> {
    let update_event = UpdateEventRequestWithEventId::new(event_id, req);
    registry
        .event_repository()
        .update(update_event.into())
        .await
        .map(EventResponse::from)
        .map(Json)
}

pub async fn delete_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .event_repository()
        .delete(DeleteEvent { event_id })
        .await
        .map(|_| {
            Json(MessageResponse {
                message: "event deleted successfully".into(),
            })
        })
}
