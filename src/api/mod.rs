pub mod bookings;
pub mod events;
pub mod health;
pub mod recommendations;
pub mod response;
pub mod users;
pub mod vendors;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;

use crate::services::CompletionBackend;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub completion: Arc<dyn CompletionBackend>,
}

pub fn build_router(pool: PgPool, completion: Arc<dyn CompletionBackend>) -> Router {
    let state = AppState { pool, completion };

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/users", get(users::list_users))
        .route("/api/users/{id}", get(users::get_user))
        .route("/api/users/{id}", put(users::update_user))
        .route("/api/users/{id}", delete(users::delete_user))
        .route("/api/vendors", get(vendors::list_vendors))
        .route("/api/vendors", post(vendors::create_vendor))
        .route("/api/vendors/{id}", get(vendors::get_vendor))
        .route("/api/vendors/{id}", put(vendors::update_vendor))
        .route("/api/vendors/{id}", delete(vendors::delete_vendor))
        .route("/api/vendors/{id}/services", post(vendors::add_service))
        .route(
            "/api/vendors/{id}/services/{service_id}",
            put(vendors::update_service),
        )
        .route(
            "/api/vendors/{id}/services/{service_id}",
            delete(vendors::delete_service),
        )
        .route("/api/vendors/{id}/reviews", post(vendors::add_review))
        .route("/api/events", get(events::list_events))
        .route("/api/events", post(events::create_event))
        .route("/api/events/{id}", get(events::get_event))
        .route("/api/events/{id}", put(events::update_event))
        .route("/api/events/{id}", delete(events::delete_event))
        .route("/api/bookings", get(bookings::list_bookings))
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings/{id}", get(bookings::get_booking))
        .route("/api/bookings/{id}", put(bookings::update_booking))
        .route("/api/bookings/{id}", delete(bookings::delete_booking))
        .route(
            "/api/ai/recommendations/vendors",
            get(recommendations::vendor_recommendations),
        )
        .route(
            "/api/ai/recommendations/budget",
            get(recommendations::budget_recommendations),
        )
        .route("/api/ai/social-media", post(recommendations::social_media_post))
        .route(
            "/api/ai/pricing-suggestions",
            get(recommendations::pricing_suggestions),
        )
        .with_state(state)
}
