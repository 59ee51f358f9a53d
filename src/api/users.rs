use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::api::response::{success, ApiError};
use crate::api::AppState;
use crate::middleware::AuthUser;
use crate::models::user::{Role, UpdateUser};
use crate::repositories::UserRepository;

pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    user.authorize(&[Role::Admin])?;

    let repo = UserRepository::new(&state.pool);
    let users = repo.list_all().await?;

    Ok(Json(json!({
        "success": true,
        "count": users.len(),
        "data": users,
    })))
}

pub async fn get_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if user.id != user_id && !user.is_admin() {
        return Err(ApiError::Forbidden(
            "Not authorized to access this user".to_string(),
        ));
    }

    let repo = UserRepository::new(&state.pool);
    let account = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(success(account))
}

pub async fn update_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateUser>,
) -> Result<impl IntoResponse, ApiError> {
    if user.id != user_id && !user.is_admin() {
        return Err(ApiError::Forbidden(
            "Not authorized to update this user".to_string(),
        ));
    }

    let repo = UserRepository::new(&state.pool);
    let mut account = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    // Role is deliberately absent here; it only moves with the vendor
    // profile lifecycle.
    account.apply(payload);
    repo.update(&account).await?;

    Ok(success(account))
}

pub async fn delete_user(
    State(state): State<AppState>,
    user: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    user.authorize(&[Role::Admin])?;

    let repo = UserRepository::new(&state.pool);

    if !repo.delete(user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    info!("Deleted user {}", user_id);

    Ok(success(json!({})))
}
