//! # Admin Routes Module
//!
//! Routes for the `/api/admin` endpoint group.
//!
//! ## Structure
//! - `post.rs`: admin login
//! - `get.rs`: session check
//!
//! Login is public; `checkAuth` sits behind the [`allow_admin`] guard.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use get::check_auth;
use post::login;
use util::state::AppState;

use crate::auth::guards::allow_admin;

pub mod get;
pub mod post;

/// Builds the `/admin` route group.
///
/// - `POST /admin` → `login` (public)
/// - `GET /admin/checkAuth` → `check_auth` (admin only)
pub fn admin_routes(app_state: AppState) -> Router<AppState> {
    Router::new().route("/", post(login)).merge(
        Router::new()
            .route("/checkAuth", get(check_auth))
            .route_layer(from_fn_with_state(app_state, allow_admin)),
    )
}
