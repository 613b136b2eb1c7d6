//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/admin` → Admin login (public) and session check (admin-only)
//! - `/badges` → Badge management (admin-only)
//! - `/scan` → Badge scans from readers (public)

use crate::auth::guards::allow_admin;
use crate::routes::{
    admin::admin_routes, badges::badge_routes, health::health_routes, scan::scan_routes,
};
use axum::{Router, middleware::from_fn_with_state};
use util::state::AppState;

pub mod admin;
pub mod badges;
pub mod health;
pub mod scan;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has `AppState` as its state type; the caller nests it
/// under `/api` and supplies the state.
pub fn routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/admin", admin_routes(app_state.clone()))
        .nest(
            "/badges",
            badge_routes().route_layer(from_fn_with_state(app_state, allow_admin)),
        )
        .nest("/scan", scan_routes())
}
