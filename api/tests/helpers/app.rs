use api::{auth::generate_jwt, build_app};
use axum::{Router, body::Body, extract::connect_info::MockConnectInfo, response::Response};
use db::{models::badge::Model as Badge, test_utils::setup_test_db};
use serde_json::Value;
use std::net::SocketAddr;
use util::{config::AppConfig, state::AppState, ws::ConnectionRegistry};

pub const ADMIN_BADGE_ID: &str = "ADMIN";
pub const ADMIN_PASSWORD: &str = "hunter2";
pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn test_config() -> AppConfig {
    AppConfig {
        env: "test".into(),
        jwt_secret: "integration-test-secret".into(),
        admin_badge_id: ADMIN_BADGE_ID.into(),
        admin_password: ADMIN_PASSWORD.into(),
        allowed_origin: Some(ALLOWED_ORIGIN.into()),
        ..AppConfig::default()
    }
}

/// Full application over a fresh in-memory store with the admin badge bootstrapped.
///
/// `MockConnectInfo` stands in for the peer address when driving the router
/// with `oneshot`; a real server's `ConnectInfo` takes precedence.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    Badge::ensure_admin(&db, ADMIN_BADGE_ID)
        .await
        .expect("Failed to bootstrap admin badge");

    let state = AppState::new(db, ConnectionRegistry::new(), &test_config());
    let app = build_app(state.clone())
        .expect("Failed to build app")
        .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 0))));

    (app, state)
}

pub fn admin_token(state: &AppState) -> String {
    generate_jwt(state).expect("Failed to sign token").0
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
