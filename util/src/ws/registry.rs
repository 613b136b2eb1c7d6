//! Registry of live WebSocket connections and fan-out of scan events.
//!
//! Every accepted socket is registered here with its own outbound queue. A
//! connection walks `Connecting -> Open -> Closed`; only `Open` connections
//! receive broadcasts. Entries are removed by the connection's own close path,
//! never by a broadcast.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, mpsc};

/// Identifier handed out by [`ConnectionRegistry::register`].
pub type ConnectionId = u64;

/// Outbound queue feeding one socket's writer task.
type Outbox = mpsc::UnboundedSender<String>;

/// Lifecycle of a single connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

struct Connection {
    origin: Option<String>,
    state: ConnectionState,
    outbox: Outbox,
}

/// Shared handle over the set of live connections.
///
/// Cloning is cheap; all clones see the same set. The registry lives inside
/// `AppState` and is dropped with the server.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    connections: Arc<RwLock<HashMap<ConnectionId, Connection>>>,
    next_id: Arc<AtomicU64>,
}

impl ConnectionRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a connection in the `Connecting` state and returns its id together
    /// with the receiving end of its outbound queue.
    pub async fn register(
        &self,
        origin: Option<String>,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let (outbox, rx) = mpsc::unbounded_channel();

        self.connections.write().await.insert(
            id,
            Connection {
                origin,
                state: ConnectionState::Connecting,
                outbox,
            },
        );

        (id, rx)
    }

    /// Marks a connection as open. Returns `false` if the id is unknown.
    pub async fn open(&self, id: ConnectionId) -> bool {
        let mut map = self.connections.write().await;
        match map.get_mut(&id) {
            Some(conn) => {
                conn.state = ConnectionState::Open;
                tracing::info!(
                    connection = id,
                    origin = conn.origin.as_deref().unwrap_or("unknown"),
                    "WebSocket connection opened"
                );
                true
            }
            None => false,
        }
    }

    /// Removes a connection. Dropping its outbox ends the socket's writer task.
    pub async fn close(&self, id: ConnectionId) -> bool {
        let removed = self.connections.write().await.remove(&id).is_some();
        if removed {
            tracing::info!(connection = id, "WebSocket connection closed");
        }
        removed
    }

    /// Current state of a connection. Ids that are no longer registered are `Closed`.
    pub async fn state(&self, id: ConnectionId) -> ConnectionState {
        self.connections
            .read()
            .await
            .get(&id)
            .map_or(ConnectionState::Closed, |c| c.state)
    }

    /// Number of registered connections in any state.
    pub async fn len(&self) -> usize {
        self.connections.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.read().await.is_empty()
    }

    /// Number of connections currently able to receive broadcasts.
    pub async fn open_count(&self) -> usize {
        self.connections
            .read()
            .await
            .values()
            .filter(|c| c.state == ConnectionState::Open)
            .count()
    }

    /// Queues `msg` on every open connection and returns how many accepted it.
    ///
    /// Connections that are not open, or whose writer has already gone away,
    /// are skipped without being removed.
    pub async fn broadcast<T: Into<String>>(&self, msg: T) -> usize {
        let msg = msg.into();
        let map = self.connections.read().await;

        let mut delivered = 0;
        for (id, conn) in map.iter() {
            if conn.state != ConnectionState::Open {
                continue;
            }
            if conn.outbox.send(msg.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::debug!(connection = id, "Skipping connection with closed outbox");
            }
        }
        delivered
    }
}
