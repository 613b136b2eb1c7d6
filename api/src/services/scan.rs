//! Scan processing: look up the badge, persist the toggle, tell every open client.
//!
//! Exactly one event is broadcast for every scan that reaches the store, and
//! when the scan succeeds that event is only sent after the write has landed.

use axum::http::StatusCode;
use db::models::badge::Model as Badge;
use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;
use util::ws::ConnectionRegistry;

use crate::routes::badges::common::BadgeResponse;
use crate::ws::scan::{emit, payload::ScanEventType};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Badge ID is required.")]
    MissingId,
    #[error("Badge not found")]
    NotFound,
    #[error("Database error: {0}")]
    Store(#[from] DbErr),
}

impl ScanError {
    pub fn status(&self) -> StatusCode {
        match self {
            ScanError::MissingId => StatusCode::BAD_REQUEST,
            ScanError::NotFound => StatusCode::NOT_FOUND,
            ScanError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result of a successful scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub kind: ScanEventType,
    pub badge: BadgeResponse,
    /// Number of clients the event was queued to.
    pub delivered: usize,
}

/// Handles one scan of `badge_id`.
///
/// A blank identifier is rejected before anything else happens. Any other
/// identifier is looked up exactly as given, surrounding whitespace included. The
/// badge is toggled and the post-write state is broadcast as `adminBadgeScanned`
/// or `badgeScanned`; an unknown identifier or a store failure broadcasts a
/// `badgeScanned` failure instead.
pub async fn process_scan(
    db: &DatabaseConnection,
    ws: &ConnectionRegistry,
    admin_badge_id: &str,
    badge_id: &str,
) -> Result<ScanOutcome, ScanError> {
    if badge_id.trim().is_empty() {
        return Err(ScanError::MissingId);
    }

    let kind = if badge_id == admin_badge_id {
        ScanEventType::AdminBadgeScanned
    } else {
        ScanEventType::BadgeScanned
    };

    let result = match Badge::find_by_badge_id(db, badge_id).await {
        Ok(Some(badge)) => badge.record_scan(db).await.map_err(ScanError::from),
        Ok(None) => Err(ScanError::NotFound),
        Err(e) => Err(ScanError::from(e)),
    };

    match result {
        Ok(badge) => {
            let badge = BadgeResponse::from(badge);
            let delivered = emit::badge_scanned(ws, kind, badge.clone()).await;
            tracing::info!(
                badge_id,
                is_scanned = badge.is_scanned,
                admin = kind == ScanEventType::AdminBadgeScanned,
                delivered,
                "Badge scanned"
            );
            Ok(ScanOutcome {
                kind,
                badge,
                delivered,
            })
        }
        Err(e) => {
            let delivered = emit::scan_failed(ws).await;
            match &e {
                ScanError::NotFound => {
                    tracing::warn!(badge_id, delivered, "Scan of unknown badge")
                }
                _ => tracing::error!(badge_id, error = %e, delivered, "Scan failed"),
            }
            Err(e)
        }
    }
}
