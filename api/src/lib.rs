pub mod auth;
pub mod response;
pub mod routes;
pub mod services;
pub mod ws;

use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{CONTENT_TYPE, InvalidHeaderValue},
    },
    middleware::from_fn,
};
use tower_http::cors::CorsLayer;
use util::state::AppState;

use crate::auth::{extractors::AUTH_HEADER, middleware::log_request};

/// CORS policy for the single configured client origin.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(HeaderValue::from_str(allowed_origin)?)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([HeaderName::from_static(AUTH_HEADER), CONTENT_TYPE]))
}

/// Assembles the full application: `/api` routes, the `/ws` channel,
/// request logging and CORS.
///
/// Request logging reads `ConnectInfo<SocketAddr>`, so serve the result with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_app(app_state: AppState) -> Result<Router, InvalidHeaderValue> {
    let cors = cors_layer(app_state.allowed_origin())?;

    Ok(Router::new()
        .nest("/api", routes::routes(app_state.clone()))
        .nest("/ws", ws::ws_routes())
        .layer(from_fn(log_request))
        .layer(cors)
        .with_state(app_state))
}
