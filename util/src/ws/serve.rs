use axum::extract::ws::{Message, WebSocket};
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::time;

use super::ConnectionRegistry;

/// Text frame sent to a client whose origin is not allowed, right before closing.
pub const REJECTION_MESSAGE: &str = "Connection not allowed";

pub struct WsServerOptions {
    pub ws_ping_sec: u64,
}

impl Default for WsServerOptions {
    fn default() -> Self {
        Self { ws_ping_sec: 30 }
    }
}

/// Exact match between the declared `Origin` and the single allowed origin.
pub fn is_allowed_origin(origin: Option<&str>, allowed: &str) -> bool {
    origin == Some(allowed)
}

/// Drives one upgraded socket for its whole life.
///
/// Rejected origins get [`REJECTION_MESSAGE`] and a close frame and are never
/// registered. Accepted sockets are registered, opened, fed from their outbox
/// until either side closes, then removed from the registry.
pub async fn serve_connection(
    mut socket: WebSocket,
    registry: ConnectionRegistry,
    origin: Option<String>,
    allowed_origin: &str,
    opts: WsServerOptions,
) {
    if !is_allowed_origin(origin.as_deref(), allowed_origin) {
        tracing::warn!(
            origin = origin.as_deref().unwrap_or("unknown"),
            "WebSocket connection from not allowed origin"
        );
        let _ = socket.send(Message::Text(REJECTION_MESSAGE.into())).await;
        let _ = socket.send(Message::Close(None)).await;
        return;
    }

    let (id, mut outbox) = registry.register(origin).await;
    let (mut sink, mut stream) = socket.split();

    // S→C: queued events plus WS-level keepalive pings
    let writer_task = tokio::spawn(async move {
        let mut ping = time::interval(Duration::from_secs(opts.ws_ping_sec.max(1)));
        ping.tick().await;
        loop {
            tokio::select! {
                queued = outbox.recv() => match queued {
                    Some(text) => {
                        if sink.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    None => {
                        let _ = sink.send(Message::Close(None)).await;
                        break;
                    }
                },
                _ = ping.tick() => {
                    if sink.send(Message::Ping(Bytes::new())).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    registry.open(id).await;

    // C→S: the channel is send-only, so client payloads are drained and dropped
    while let Some(Ok(msg)) = stream.next().await {
        match msg {
            Message::Close(_) => break,
            Message::Text(_) | Message::Binary(_) => {
                tracing::debug!(connection = id, "Ignoring client message on send-only channel");
            }
            Message::Ping(_) | Message::Pong(_) => {}
        }
    }

    registry.close(id).await;
    let _ = writer_task.await;
}
