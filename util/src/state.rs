//! Application state container shared across Axum route handlers and services.
//!
//! This struct holds shared resources such as the database connection, the
//! WebSocket connection registry and the session signing keys. It is cloned
//! into route handlers via Axum's `State<T>` extractor.

use crate::config::AppConfig;
use crate::ws::ConnectionRegistry;
use jsonwebtoken::{DecodingKey, EncodingKey};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// The one admin identity the server knows about.
#[derive(Clone)]
pub struct AdminCredentials {
    pub badge_id: String,
    pub password: String,
}

#[derive(Clone)]
struct Settings {
    jwt_encoding_key: EncodingKey,
    jwt_decoding_key: DecodingKey,
    jwt_duration_minutes: i64,
    admin: AdminCredentials,
    allowed_origin: String,
    ws_ping_seconds: u64,
}

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The `ConnectionRegistry` every scan event is broadcast through.
/// - Signing keys, admin credentials and the allowed WebSocket origin.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    ws: ConnectionRegistry,
    settings: Arc<Settings>,
}

impl AppState {
    /// Creates a new `AppState` from a database connection, a registry and the loaded config.
    ///
    /// # Arguments
    ///
    /// * `db` - A SeaORM `DatabaseConnection`, typically cloned from the main pool.
    /// * `ws` - The registry of live WebSocket connections.
    /// * `config` - Source of secrets, credentials and the allowed origin.
    pub fn new(db: DatabaseConnection, ws: ConnectionRegistry, config: &AppConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            db,
            ws,
            settings: Arc::new(Settings {
                jwt_encoding_key: EncodingKey::from_secret(secret),
                jwt_decoding_key: DecodingKey::from_secret(secret),
                jwt_duration_minutes: i64::try_from(config.jwt_duration_minutes).unwrap_or(60),
                admin: AdminCredentials {
                    badge_id: config.admin_badge_id.clone(),
                    password: config.admin_password.clone(),
                },
                allowed_origin: config.allowed_origin(),
                ws_ping_seconds: config.ws_ping_seconds,
            }),
        }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a shared reference to the connection registry.
    pub fn ws(&self) -> &ConnectionRegistry {
        &self.ws
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.settings.jwt_encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.settings.jwt_decoding_key
    }

    pub fn jwt_duration_minutes(&self) -> i64 {
        self.settings.jwt_duration_minutes
    }

    pub fn admin(&self) -> &AdminCredentials {
        &self.settings.admin
    }

    /// Reserved badge identifier that triggers the admin flow when scanned.
    pub fn admin_badge_id(&self) -> &str {
        &self.settings.admin.badge_id
    }

    pub fn allowed_origin(&self) -> &str {
        &self.settings.allowed_origin
    }

    pub fn ws_ping_seconds(&self) -> u64 {
        self.settings.ws_ping_seconds
    }
}

impl AppState {
    /// Returns a cloned handle to the connection registry.
    pub fn ws_clone(&self) -> ConnectionRegistry {
        self.ws.clone()
    }
}
