use axum::{Router, routing::get};
use util::state::AppState;

use crate::ws::handlers::ws_handler;

pub mod handlers;
pub mod scan;

/// Routes for the real-time channel, nested under `/ws` by the server.
pub fn ws_routes() -> Router<AppState> {
    Router::new().route("/", get(ws_handler))
}
