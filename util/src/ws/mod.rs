// util/src/ws/mod.rs
pub mod registry;
pub mod serve;

pub use registry::{ConnectionId, ConnectionRegistry, ConnectionState};
pub use serve::{REJECTION_MESSAGE, WsServerOptions, is_allowed_origin, serve_connection};

use serde::Serialize;

/// Serialize `event` once and queue it on every open connection.
///
/// Returns the number of connections the event was queued to; serialization
/// failures are logged and count as zero deliveries.
pub async fn emit<T: Serialize>(ws: &ConnectionRegistry, event: &T) -> usize {
    match serde_json::to_string(event) {
        Ok(json) => ws.broadcast(json).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize WebSocket event");
            0
        }
    }
}
