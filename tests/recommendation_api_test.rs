mod support;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use planora::models::event::{CreateEvent, Event, EventStatus, EventType};
use planora::models::user::Role;
use planora::models::vendor::{NewService, Service, ServiceType};
use planora::repositories::{EventRepository, VendorRepository};

use support::*;

const VENDOR_REPLY: &str = r#"{
    "recommendations": [{
        "vendorId": "b3c0a7c2-1111-4e88-9d52-0a51e6f2f000",
        "vendorName": "Golden Fork Catering",
        "serviceType": "catering",
        "reason": "Top rated for weddings",
        "estimatedCost": 4500,
        "specialConsiderations": "Books out early in summer"
    }],
    "totalEstimatedCost": 4500,
    "budgetAnalysis": "Within the stated budget"
}"#;

const BUDGET_REPLY: &str = r#"{
    "budgetBreakdown": [{
        "vendorType": "venue",
        "allocation": 8000,
        "percentageOfTotal": 40,
        "notes": "Largest single line item"
    }],
    "costPerGuest": 200,
    "savingsSuggestions": [{
        "area": "decoration",
        "potentialSavings": 500,
        "impact": "Minimal visual difference"
    }],
    "alternativeOptions": [{
        "description": "Off-peak weekday booking",
        "estimatedSavings": 1500
    }]
}"#;

const PRICING_REPLY: &str = r#"{
    "recommendedPriceRange": {"min": 700, "max": 1100},
    "optimalPrice": 950,
    "analysis": "Strong ratings support above-median pricing",
    "seasonalStrategy": [
        {"season": "summer", "adjustmentFactor": 1.2, "reasoning": "Peak demand"}
    ]
}"#;

async fn seed_event(pool: &PgPool, user_id: uuid::Uuid) -> Event {
    let event = Event::new(
        user_id,
        CreateEvent {
            title: "Launch Night".to_string(),
            description: "Product launch party".to_string(),
            event_type: EventType::Corporate,
            date: Utc::now(),
            time: "18:00".to_string(),
            location: "Skyline Terrace".to_string(),
            expected_attendees: 80,
            budget: 10_000.0,
            status: EventStatus::default(),
        },
    );

    EventRepository::new(pool).create(&event).await.unwrap();

    event
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_vendor_recommendations_round_trip(pool: PgPool) {
    let stub = StubCompletion::with_reply(VENDOR_REPLY);
    let app = test_app(pool.clone(), stub.clone());

    let owner = seed_user(&pool, Role::Vendor).await;
    let mut vendor =
        seed_vendor(&pool, owner.id, "Golden Fork Catering", ServiceType::Catering).await;
    vendor.average_rating = 4.6;
    vendor.is_verified = true;
    VendorRepository::new(&pool).save(&vendor).await.unwrap();

    let user = seed_user(&pool, Role::User).await;
    let token = bearer_token(user.id, Role::User);

    let response = app
        .oneshot(get(
            "/api/ai/recommendations/vendors?eventType=wedding&budget=20000&guestCount=150",
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["totalEstimatedCost"], 4500.0);
    assert_eq!(
        body["data"]["recommendations"][0]["vendorName"],
        "Golden Fork Catering"
    );
    assert_eq!(stub.call_count(), 1);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_malformed_reply_is_an_opaque_500(pool: PgPool) {
    let stub = StubCompletion::with_reply("Sorry, I cannot help with that.");
    let app = test_app(pool.clone(), stub.clone());

    let user = seed_user(&pool, Role::User).await;
    let token = bearer_token(user.id, Role::User);

    let response = app
        .oneshot(get("/api/ai/recommendations/vendors", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    // The parse failure is not leaked to the caller.
    assert_eq!(body["message"], "Server error");
    assert_eq!(stub.call_count(), 1);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_budget_recommendations_round_trip(pool: PgPool) {
    let stub = StubCompletion::with_reply(BUDGET_REPLY);
    let app = test_app(pool.clone(), stub.clone());

    let owner = seed_user(&pool, Role::Vendor).await;
    let mut vendor = seed_vendor(&pool, owner.id, "Harbor Hall", ServiceType::Venue).await;
    vendor.is_verified = true;
    vendor.services.push(Service::from_new(NewService {
        name: "Evening rental".to_string(),
        description: None,
        price: 5000.0,
        price_unit: Default::default(),
    }));
    VendorRepository::new(&pool).save(&vendor).await.unwrap();

    let user = seed_user(&pool, Role::User).await;
    let token = bearer_token(user.id, Role::User);

    let response = app
        .oneshot(get(
            "/api/ai/recommendations/budget?eventType=conference&totalBudget=20000&guestCount=100",
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["costPerGuest"], 200.0);
    assert_eq!(stub.call_count(), 1);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_social_media_post_for_owner(pool: PgPool) {
    let stub = StubCompletion::with_reply("Join us at Launch Night! #launch");
    let app = test_app(pool.clone(), stub.clone());

    let owner = seed_user(&pool, Role::User).await;
    let event = seed_event(&pool, owner.id).await;
    let token = bearer_token(owner.id, Role::User);

    let response = app
        .oneshot(post_json(
            "/api/ai/social-media",
            &token,
            json!({"eventId": event.id, "platform": "instagram", "tone": "excited"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["platform"], "instagram");
    assert_eq!(body["data"]["content"], "Join us at Launch Night! #launch");
    assert_eq!(stub.call_count(), 1);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_social_media_post_forbidden_without_completion_call(pool: PgPool) {
    let stub = StubCompletion::with_reply("should never be produced");
    let app = test_app(pool.clone(), stub.clone());

    let owner = seed_user(&pool, Role::User).await;
    let event = seed_event(&pool, owner.id).await;

    let other = seed_user(&pool, Role::User).await;
    let other_token = bearer_token(other.id, Role::User);

    let response = app
        .oneshot(post_json(
            "/api/ai/social-media",
            &other_token,
            json!({"eventId": event.id, "platform": "instagram"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(stub.call_count(), 0);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_social_media_post_missing_event(pool: PgPool) {
    let stub = StubCompletion::with_reply("unused");
    let app = test_app(pool.clone(), stub.clone());

    let user = seed_user(&pool, Role::User).await;
    let token = bearer_token(user.id, Role::User);

    let response = app
        .oneshot(post_json(
            "/api/ai/social-media",
            &token,
            json!({"eventId": uuid::Uuid::new_v4(), "platform": "twitter"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(stub.call_count(), 0);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_pricing_suggestions_require_vendor_role(pool: PgPool) {
    let stub = StubCompletion::with_reply(PRICING_REPLY);
    let app = test_app(pool.clone(), stub.clone());

    let user = seed_user(&pool, Role::User).await;
    let token = bearer_token(user.id, Role::User);

    let response = app
        .oneshot(get("/api/ai/pricing-suggestions", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(stub.call_count(), 0);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_pricing_suggestions_require_a_profile(pool: PgPool) {
    let stub = StubCompletion::with_reply(PRICING_REPLY);
    let app = test_app(pool.clone(), stub.clone());

    let user = seed_user(&pool, Role::Vendor).await;
    let token = bearer_token(user.id, Role::Vendor);

    let response = app
        .oneshot(get("/api/ai/pricing-suggestions", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Vendor profile not found");
    assert_eq!(stub.call_count(), 0);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_pricing_suggestions_round_trip(pool: PgPool) {
    let stub = StubCompletion::with_reply(PRICING_REPLY);
    let app = test_app(pool.clone(), stub.clone());

    let caller = seed_user(&pool, Role::Vendor).await;
    seed_vendor(&pool, caller.id, "Fork & Frame Photo", ServiceType::Photography).await;

    // A competitor with a comparable service supplies the market snapshot.
    let competitor = seed_user(&pool, Role::Vendor).await;
    let mut rival =
        seed_vendor(&pool, competitor.id, "Shutter Story", ServiceType::Photography).await;
    rival.services.push(Service::from_new(NewService {
        name: "Photo booth rental".to_string(),
        description: None,
        price: 900.0,
        price_unit: Default::default(),
    }));
    VendorRepository::new(&pool).save(&rival).await.unwrap();

    let token = bearer_token(caller.id, Role::Vendor);

    let response = app
        .oneshot(get(
            "/api/ai/pricing-suggestions?serviceName=photo%20booth&currentPrice=750",
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["optimalPrice"], 950.0);
    assert_eq!(body["data"]["recommendedPriceRange"]["min"], 700.0);
    assert_eq!(stub.call_count(), 1);
}

#[sqlx::test(migrations = "src/db/migrations")]
async fn test_recommendations_require_authentication(pool: PgPool) {
    let stub = StubCompletion::with_reply(VENDOR_REPLY);
    let app = test_app(pool.clone(), stub.clone());

    let response = app
        .oneshot(get_public("/api/ai/recommendations/vendors"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(stub.call_count(), 0);
}
