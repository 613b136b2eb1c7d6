//! # Badges Routes Module
//!
//! This module defines and wires up routes for the `/api/badges` endpoint group.
//!
//! ## Structure
//! - `get.rs`: GET handlers (list, fetch one)
//! - `post.rs`: POST handlers (create)
//! - `put.rs`: PUT handlers (rename)
//! - `delete.rs`: DELETE handlers (delete one, delete all but admin)
//!
//! ## Middleware
//! Every route in this group is admin-only; the guard is attached where the
//! group is nested in [`crate::routes::routes`].

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use delete::{delete_all_badges, delete_badge};
use get::{get_badge, list_badges};
use post::create_badge;
use put::rename_badge;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/badges` route group, mapping HTTP methods to handlers.
///
/// - `GET /badges` → `list_badges`
/// - `POST /badges` → `create_badge`
/// - `DELETE /badges` → `delete_all_badges`
/// - `GET /badges/{badge_id}` → `get_badge`
/// - `PUT /badges/{badge_id}` → `rename_badge`
/// - `DELETE /badges/{badge_id}` → `delete_badge`
pub fn badge_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_badges))
        .route("/", post(create_badge))
        .route("/", delete(delete_all_badges))
        .route("/{badge_id}", get(get_badge))
        .route("/{badge_id}", put(rename_badge))
        .route("/{badge_id}", delete(delete_badge))
}
