//! WebSocket upgrade handler for the scan event channel.
//!
//! The channel is send-only from the server's side: clients connect and listen.
//! Origin checking happens after the upgrade so a rejected client still gets a
//! readable reason before the close frame.

use axum::{
    extract::{State, WebSocketUpgrade, ws::WebSocket},
    http::{HeaderMap, header::ORIGIN},
    response::IntoResponse,
};
use util::state::AppState;
use util::ws::{WsServerOptions, serve_connection};

/// Axum handler for `GET /ws`.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let origin = headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let registry = state.ws_clone();
    let allowed_origin = state.allowed_origin().to_owned();
    let opts = WsServerOptions {
        ws_ping_sec: state.ws_ping_seconds(),
    };

    ws.on_upgrade(move |socket: WebSocket| async move {
        serve_connection(socket, registry, origin, &allowed_origin, opts).await;
    })
}
