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
use crate::models::booking::{Booking, CreateBooking, UpdateBooking};
use crate::repositories::BookingRepository;

pub async fn list_bookings(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BookingRepository::new(&state.pool);

    let bookings = if user.is_admin() {
        repo.list_all().await?
    } else {
        repo.list_for_user(user.id).await?
    };

    Ok(Json(json!({
        "success": true,
        "count": bookings.len(),
        "data": bookings,
    })))
}

pub async fn create_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBooking>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BookingRepository::new(&state.pool);

    let booking = Booking::new(user.id, payload);
    repo.create(&booking).await?;

    info!(
        "Created booking {} (event {}, vendor {})",
        booking.id, booking.event_id, booking.vendor_id
    );

    Ok((StatusCode::CREATED, success(booking)))
}

pub async fn get_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BookingRepository::new(&state.pool);

    let booking = repo
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    if booking.user_id != user.id && !user.is_admin() {
        return Err(ApiError::Forbidden(
            "Not authorized to access this booking".to_string(),
        ));
    }

    Ok(success(booking))
}

pub async fn update_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(booking_id): Path<Uuid>,
    Json(payload): Json<UpdateBooking>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BookingRepository::new(&state.pool);

    let mut booking = repo
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    if booking.user_id != user.id && !user.is_admin() {
        return Err(ApiError::Forbidden(
            "Not authorized to update this booking".to_string(),
        ));
    }

    booking.apply(payload);
    repo.save(&booking).await?;

    Ok(success(booking))
}

pub async fn delete_booking(
    State(state): State<AppState>,
    user: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BookingRepository::new(&state.pool);

    let booking = repo
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    if booking.user_id != user.id && !user.is_admin() {
        return Err(ApiError::Forbidden(
            "Not authorized to cancel this booking".to_string(),
        ));
    }

    repo.delete(booking.id).await?;

    info!("Deleted booking {}", booking.id);

    Ok((StatusCode::OK, success(json!({}))))
}
