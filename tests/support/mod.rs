#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use planora::api::build_router;
use planora::middleware::auth::Claims;
use planora::models::user::{Role, User};
use planora::models::vendor::{CreateVendor, ServiceType, Vendor};
use planora::repositories::{UserRepository, VendorRepository};
use planora::services::completion::{CompletionBackend, CompletionError, CompletionPrompt};

pub const JWT_SECRET: &str = "planora-test-secret";

// Scripted completion backend; counts invocations so tests can assert that
// authorization short-circuits before any upstream traffic.
pub struct StubCompletion {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubCompletion {
    pub fn with_reply(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for StubCompletion {
    async fn complete(&self, _prompt: CompletionPrompt) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(CompletionError::EmptyReply),
        }
    }
}

pub fn test_app(pool: PgPool, completion: Arc<StubCompletion>) -> Router {
    std::env::set_var("JWT_SECRET", JWT_SECRET);
    build_router(pool, completion)
}

pub fn bearer_token(user_id: Uuid, role: Role) -> String {
    let claims = Claims {
        sub: user_id,
        role,
        exp: 4_102_444_800,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub async fn seed_user(pool: &PgPool, role: Role) -> User {
    let user = User::new(
        "Test User".to_string(),
        format!("{}@example.com", Uuid::new_v4()),
        Some("555-0100".to_string()),
        role,
    );

    UserRepository::new(pool).create(&user).await.unwrap();

    user
}

pub async fn seed_vendor(
    pool: &PgPool,
    user_id: Uuid,
    business_name: &str,
    service_type: ServiceType,
) -> Vendor {
    let vendor = Vendor::new(
        user_id,
        format!("{}@example.com", Uuid::new_v4()),
        "555-0101".to_string(),
        CreateVendor {
            business_name: business_name.to_string(),
            business_description: "Seeded vendor profile".to_string(),
            service_type,
            contact_email: None,
            contact_phone: None,
            business_address: None,
            services: vec![],
        },
    );

    VendorRepository::new(pool).create(&vendor).await.unwrap();

    vendor
}

pub fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn get_public(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, token: &str, body: Value) -> Request<Body> {
    request_with_json("POST", uri, token, body)
}

pub fn put_json(uri: &str, token: &str, body: Value) -> Request<Body> {
    request_with_json("PUT", uri, token, body)
}

pub fn delete(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn request_with_json(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
