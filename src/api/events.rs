use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::api::response::{success, ApiError};
use crate::api::AppState;
use crate::middleware::AuthUser;
use crate::models::event::{CreateEvent, Event, UpdateEvent};
use crate::repositories::EventRepository;

pub async fn list_events(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let repo = EventRepository::new(&state.pool);
    let events = repo.list_for_user(user.id).await?;

    Ok(Json(json!({
        "success": true,
        "count": events.len(),
        "data": events,
    })))
}

pub async fn create_event(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = EventRepository::new(&state.pool);

    let event = Event::new(user.id, payload);
    repo.create(&event).await?;

    info!("Created event {} for user {}", event.id, user.id);

    Ok((StatusCode::CREATED, success(event)))
}

pub async fn get_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = EventRepository::new(&state.pool);

    let event = repo
        .find_by_id_for_user(event_id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    Ok(success(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<UpdateEvent>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = EventRepository::new(&state.pool);

    let mut event = repo
        .find_by_id_for_user(event_id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    event.apply(payload);
    repo.save(&event).await?;

    Ok(success(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = EventRepository::new(&state.pool);

    if !repo.delete_for_user(event_id, user.id).await? {
        return Err(ApiError::NotFound("Event not found".to_string()));
    }

    info!("Deleted event {}", event_id);

    Ok(Json(json!({
        "success": true,
        "message": "Event deleted successfully",
    })))
}
