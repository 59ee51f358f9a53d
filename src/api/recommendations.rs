use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::api::response::{success, ApiError};
use crate::api::AppState;
use crate::engine::prompt::{
    self, BudgetCriteria, PricingCriteria, VendorRecommendationCriteria,
};
use crate::engine::reply::{
    self, BudgetRecommendations, PricingSuggestions, VendorRecommendations,
};
use crate::engine::snapshot::{self, PastVendorPreference, VendorSnapshot};
use crate::engine::vendor_types_for_event;
use crate::middleware::AuthUser;
use crate::models::user::Role;
use crate::repositories::{BookingRepository, EventRepository, VendorRepository};
use crate::services::completion::CompletionPrompt;

const RECENT_BOOKINGS_LIMIT: i64 = 5;
const VENDOR_SNAPSHOT_LIMIT: i64 = 20;
const RECOMMENDED_MIN_RATING: f64 = 4.0;

pub async fn vendor_recommendations(
    State(state): State<AppState>,
    user: AuthUser,
    Query(criteria): Query<VendorRecommendationCriteria>,
) -> Result<impl IntoResponse, ApiError> {
    let pool = &state.pool;

    let past_preferences: Vec<PastVendorPreference> = BookingRepository::new(pool)
        .recent_vendor_preferences(user.id, RECENT_BOOKINGS_LIMIT)
        .await?
        .into_iter()
        .map(|(service_type, rating)| PastVendorPreference {
            service_type,
            rating,
        })
        .collect();

    let service_types = criteria.event_type.as_deref().map(vendor_types_for_event);
    let vendors = VendorRepository::new(pool)
        .top_rated(
            service_types.as_deref(),
            RECOMMENDED_MIN_RATING,
            VENDOR_SNAPSHOT_LIMIT,
        )
        .await?;
    let vendor_snapshots: Vec<VendorSnapshot> =
        vendors.iter().map(VendorSnapshot::from).collect();

    let prompt_text =
        prompt::vendor_recommendation_prompt(&vendor_snapshots, &past_preferences, &criteria)?;

    let raw = state
        .completion
        .complete(CompletionPrompt {
            system: prompt::VENDOR_RECOMMENDER_ROLE.to_string(),
            user: prompt_text,
            json_response: true,
        })
        .await?;

    let recommendations: VendorRecommendations = reply::parse_reply(&raw)?;

    info!(
        "Generated {} vendor recommendations for user {}",
        recommendations.recommendations.len(),
        user.id
    );

    Ok(success(recommendations))
}

pub async fn budget_recommendations(
    State(state): State<AppState>,
    user: AuthUser,
    Query(criteria): Query<BudgetCriteria>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = VendorRepository::new(&state.pool);

    // Average listed price per vendor type; a type with no verified vendors
    // is left out of the prompt entirely.
    let mut average_costs = Vec::new();
    for service_type in vendor_types_for_event(criteria.event_type.as_deref().unwrap_or_default())
    {
        let vendors = repo.list_verified_by_type(service_type).await?;
        if let Some(cost) = snapshot::average_service_cost(&vendors) {
            average_costs.push((service_type, cost));
        }
    }

    let prompt_text = prompt::budget_prompt(&average_costs, &criteria)?;

    let raw = state
        .completion
        .complete(CompletionPrompt {
            system: prompt::BUDGET_PLANNER_ROLE.to_string(),
            user: prompt_text,
            json_response: true,
        })
        .await?;

    let recommendations: BudgetRecommendations = reply::parse_reply(&raw)?;

    info!("Generated budget recommendations for user {}", user.id);

    Ok(success(recommendations))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaRequest {
    pub event_id: Uuid,
    pub platform: String,
    pub tone: Option<String>,
}

pub async fn social_media_post(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<SocialMediaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event = EventRepository::new(&state.pool)
        .find_by_id(payload.event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    // Ownership gate runs before any completion traffic.
    if event.user_id != user.id {
        return Err(ApiError::Forbidden(
            "Not authorized to access this event".to_string(),
        ));
    }

    let prompt_text =
        prompt::social_media_prompt(&event, &payload.platform, payload.tone.as_deref());

    let content = state
        .completion
        .complete(CompletionPrompt {
            system: prompt::SOCIAL_MEDIA_ROLE.to_string(),
            user: prompt_text,
            json_response: false,
        })
        .await?;

    info!("Generated social media post for event {}", event.id);

    Ok(success(json!({
        "platform": payload.platform,
        "content": content,
    })))
}

pub async fn pricing_suggestions(
    State(state): State<AppState>,
    user: AuthUser,
    Query(criteria): Query<PricingCriteria>,
) -> Result<impl IntoResponse, ApiError> {
    user.authorize(&[Role::Vendor, Role::Admin])?;

    let repo = VendorRepository::new(&state.pool);

    let vendor = repo
        .find_by_user_id(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Vendor profile not found".to_string()))?;

    let service_type = criteria.service_type.unwrap_or(vendor.service_type);
    let similar_vendors = repo.list_by_type_excluding(service_type, vendor.id).await?;
    let market = snapshot::market_prices(&similar_vendors, criteria.service_name.as_deref());

    let prompt_text = prompt::pricing_suggestion_prompt(
        &market,
        service_type,
        &criteria,
        vendor.average_rating,
    )?;

    let raw = state
        .completion
        .complete(CompletionPrompt {
            system: prompt::PRICING_ANALYST_ROLE.to_string(),
            user: prompt_text,
            json_response: true,
        })
        .await?;

    let suggestions: PricingSuggestions = reply::parse_reply(&raw)?;

    info!(
        "Generated pricing suggestions for vendor {} from {} market samples",
        vendor.id,
        market.len()
    );

    Ok(success(suggestions))
}
