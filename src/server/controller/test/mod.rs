use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    model::user::User, router, service::token::TokenService, state::AppState,
};


const SECRET: &[u8] = b"router-test-signing-key-0123456789abcdef";
const ISSUER: &str = "https://localhost:7100/";
const AUDIENCE: &str = "https://localhost:7100/";
const TEST_COST: u32 = 4;

/// Seeded Himachal Pradesh region.
const HP_REGION_ID: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaa1";

fn token_service() -> TokenService {
    TokenService::new(SECRET, ISSUER, AUDIENCE)
}

/// Builds the full application over a migrated in-memory database.
async fn test_app() -> Router {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.unwrap();

    let state = AppState::new(db, token_service(), TEST_COST);

    router::app(state, None).unwrap()
}

/// Token for a user that only exists in the token; mutations only check the token.
fn bearer() -> String {
    let user = User {
        id: Uuid::new_v4(),
        username: "ranger".to_string(),
        email: "ranger@example.com".to_string(),
        password_hash: String::new(),
        created_at: Utc::now(),
        last_login_at: None,
    };

    format!("Bearer {}", token_service().generate(&user).unwrap())
}

fn request(method: Method, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends the request and returns status, headers and the JSON body (`Null` when empty).
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, body)
}

fn region_body(code: &str, name: &str) -> Value {
    json!({
        "code": code,
        "name": name,
        "regionImageUrl": "https://example.com/region.jpg"
    })
}

fn walk_body(name: &str, length: f64, region_id: &str, difficulty_id: Uuid) -> Value {
    json!({
        "name": name,
        "description": format!("{name} description"),
        "lengthInKm": length,
        "walkImageUrl": null,
        "regionId": region_id,
        "difficultyId": difficulty_id
    })
}
