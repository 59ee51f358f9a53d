use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::api::response::{success, ApiError, Pagination};
use crate::api::AppState;
use crate::middleware::AuthUser;
use crate::models::user::Role;
use crate::models::vendor::{CreateVendor, ListVendorsQuery, UpdateVendor, Vendor};
use crate::repositories::{UserRepository, VendorRepository};

pub async fn create_vendor(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateVendor>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = &state.pool;
    let vendor_repo = VendorRepository::new(pool);

    if vendor_repo.find_by_user_id(user.id).await?.is_some() {
        return Err(ApiError::Conflict(
            "Vendor profile already exists for this user".to_string(),
        ));
    }

    let user_repo = UserRepository::new(pool);
    let account = user_repo
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    // Contact details fall back to the account when the payload omits them.
    let contact_email = payload
        .contact_email
        .clone()
        .unwrap_or_else(|| account.email.clone());
    let contact_phone = payload
        .contact_phone
        .clone()
        .or(account.phone)
        .ok_or_else(|| ApiError::Validation("Contact phone is required".to_string()))?;

    let vendor = Vendor::new(user.id, contact_email, contact_phone, payload);
    vendor_repo.create(&vendor).await?;

    user_repo.set_role(user.id, Role::Vendor).await?;

    info!("Created vendor profile {} for user {}", vendor.id, user.id);

    Ok((StatusCode::CREATED, success(vendor)))
}

pub async fn list_vendors(
    State(state): State<AppState>,
    Query(query): Query<ListVendorsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new(&state.pool);

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let offset = (page - 1) * limit;

    let total = repo.count(&query).await?;
    let vendors = repo.search(&query, limit, offset).await?;
    let pagination = Pagination::new(total, page, limit);

    Ok(Json(json!({
        "success": true,
        "count": vendors.len(),
        "pagination": pagination,
        "data": vendors,
    })))
}

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new(&state.pool);

    let vendor = repo
        .find_by_id(vendor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor not found".to_string()))?;

    Ok(success(vendor))
}

pub async fn update_vendor(
    State(state): State<AppState>,
    user: AuthUser,
    Path(vendor_id): Path<Uuid>,
    Json(payload): Json<UpdateVendor>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new(&state.pool);

    let mut vendor = repo
        .find_by_id(vendor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor not found".to_string()))?;

    if vendor.user_id != user.id && !user.is_admin() {
        return Err(ApiError::Forbidden(
            "Not authorized to update this vendor profile".to_string(),
        ));
    }

    vendor.apply(payload);
    repo.save(&vendor).await?;

    info!("Updated vendor profile {}", vendor.id);

    Ok(success(vendor))
}

pub async fn delete_vendor(
    State(state): State<AppState>,
    user: AuthUser,
    Path(vendor_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = &state.pool;
    let repo = VendorRepository::new(pool);

    let vendor = repo
        .find_by_id(vendor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor not found".to_string()))?;

    if vendor.user_id != user.id && !user.is_admin() {
        return Err(ApiError::Forbidden(
            "Not authorized to delete this vendor profile".to_string(),
        ));
    }

    repo.delete(vendor.id).await?;

    info!("Deleted vendor profile {}", vendor.id);

    // The vendor role only makes sense while a profile exists.
    let remaining = repo.count_by_user(vendor.user_id).await?;
    if remaining == 0 {
        UserRepository::new(pool)
            .set_role(vendor.user_id, Role::User)
            .await?;
        info!("Demoted user {} back to the user role", vendor.user_id);
    }

    Ok(success(json!({})))
}
