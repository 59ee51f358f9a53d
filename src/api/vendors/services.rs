use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::api::response::{success, ApiError};
use crate::api::AppState;
use crate::middleware::AuthUser;
use crate::models::vendor::{NewService, Service, UpdateService, Vendor};
use crate::repositories::VendorRepository;

// The services catalog is owner-only; unlike profile updates, admins do not
// get to edit it on the vendor's behalf.
async fn owned_vendor(
    repo: &VendorRepository<'_>,
    vendor_id: Uuid,
    user: &AuthUser,
) -> Result<Vendor, ApiError> {
    let vendor = repo
        .find_by_id(vendor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor not found".to_string()))?;

    if vendor.user_id != user.id {
        return Err(ApiError::Forbidden(
            "Not authorized to update this vendor profile".to_string(),
        ));
    }

    Ok(vendor)
}

pub async fn add_service(
    State(state): State<AppState>,
    user: AuthUser,
    Path(vendor_id): Path<Uuid>,
    Json(payload): Json<NewService>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new(&state.pool);
    let mut vendor = owned_vendor(&repo, vendor_id, &user).await?;

    vendor.services.push(Service::from_new(payload));
    vendor.updated_at = Utc::now();
    repo.save(&vendor).await?;

    info!(
        "Added service to vendor {} ({} total)",
        vendor.id,
        vendor.services.len()
    );

    Ok(success(vendor))
}

pub async fn update_service(
    State(state): State<AppState>,
    user: AuthUser,
    Path((vendor_id, service_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateService>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new(&state.pool);
    let mut vendor = owned_vendor(&repo, vendor_id, &user).await?;

    match vendor.service_mut(service_id) {
        Some(service) => service.apply(payload),
        None => return Err(ApiError::NotFound("Service not found".to_string())),
    }

    vendor.updated_at = Utc::now();
    repo.save(&vendor).await?;

    Ok(success(vendor))
}

pub async fn delete_service(
    State(state): State<AppState>,
    user: AuthUser,
    Path((vendor_id, service_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new(&state.pool);
    let mut vendor = owned_vendor(&repo, vendor_id, &user).await?;

    if !vendor.remove_service(service_id) {
        return Err(ApiError::NotFound("Service not found".to_string()));
    }

    vendor.updated_at = Utc::now();
    repo.save(&vendor).await?;

    Ok(success(vendor))
}
