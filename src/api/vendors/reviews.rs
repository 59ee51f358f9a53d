use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::api::response::{success, ApiError};
use crate::api::AppState;
use crate::middleware::AuthUser;
use crate::models::vendor::{CreateReview, Review};
use crate::repositories::VendorRepository;

pub async fn add_review(
    State(state): State<AppState>,
    user: AuthUser,
    Path(vendor_id): Path<Uuid>,
    Json(payload): Json<CreateReview>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new(&state.pool);

    let mut vendor = repo
        .find_by_id(vendor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor not found".to_string()))?;

    if vendor.has_review_from(user.id) {
        return Err(ApiError::Conflict(
            "You have already reviewed this vendor".to_string(),
        ));
    }

    let review =
        Review::new(user.id, payload.rating, payload.comment).map_err(ApiError::Validation)?;

    vendor.reviews.push(review);
    vendor.recalculate_average_rating();
    vendor.updated_at = Utc::now();
    repo.save(&vendor).await?;

    info!(
        "Added review to vendor {} (average rating now {:.2})",
        vendor.id, vendor.average_rating
    );

    Ok((StatusCode::CREATED, success(vendor)))
}
