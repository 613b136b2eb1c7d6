//! # Scan Routes Module
//!
//! Public `/api/scan` endpoint hit by badge readers.

use axum::{Router, routing::get};
use get::{scan_badge, scan_without_id};
use util::state::AppState;

pub mod get;

/// Builds the `/scan` route group.
///
/// - `GET /scan` → `scan_without_id` (always 400)
/// - `GET /scan/{badge_id}` → `scan_badge`
pub fn scan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(scan_without_id))
        .route("/{badge_id}", get(scan_badge))
}
