//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables.
//!
//! Request handlers never read this singleton directly: `main` copies the values
//! they need into [`crate::state::AppState`] at startup.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: u64,
    /// Reserved badge identifier that unlocks the admin login flow.
    pub admin_badge_id: String,
    pub admin_password: String,
    pub client_host: String,
    pub client_port: u16,
    /// Explicit WebSocket origin override; derived from the client host/port when unset.
    pub allowed_origin: Option<String>,
    pub ws_ping_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: "development".into(),
            project_name: "badge-reader".into(),
            log_level: "api=info".into(),
            log_file: "api.log".into(),
            log_to_stdout: false,
            database_path: "data/badges.db".into(),
            host: "127.0.0.1".into(),
            port: 8000,
            jwt_secret: String::new(),
            jwt_duration_minutes: 60,
            admin_badge_id: String::new(),
            admin_password: String::new(),
            client_host: "localhost".into(),
            client_port: 3000,
            allowed_origin: None,
            ws_ping_seconds: 30,
        }
    }
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// This method is used internally to populate the singleton. It panics
    /// if a required variable (`JWT_SECRET`, `ADMIN_BADGE_ID`, `ADMIN_PASSWORD`) is missing.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            env: env::var("APP_ENV").unwrap_or(defaults.env),
            project_name: env::var("PROJECT_NAME").unwrap_or(defaults.project_name),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed("PORT", defaults.port),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET is required"),
            jwt_duration_minutes: parsed("JWT_DURATION_MINUTES", defaults.jwt_duration_minutes),
            admin_badge_id: env::var("ADMIN_BADGE_ID").expect("ADMIN_BADGE_ID is required"),
            admin_password: env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD is required"),
            client_host: env::var("CLIENT_HOST").unwrap_or(defaults.client_host),
            client_port: parsed("CLIENT_PORT", defaults.client_port),
            allowed_origin: env::var("ALLOWED_ORIGIN").ok().filter(|o| !o.is_empty()),
            ws_ping_seconds: parsed("WS_PING_SECONDS", defaults.ws_ping_seconds),
        }
    }

    /// The single origin WebSocket clients must declare.
    pub fn allowed_origin(&self) -> String {
        match &self.allowed_origin {
            Some(origin) => origin.clone(),
            None => format!("http://{}:{}", self.client_host, self.client_port),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }
}
