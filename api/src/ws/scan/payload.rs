// api/src/ws/scan/payload.rs
use serde::Serialize;

use crate::response::Empty;
use crate::routes::badges::common::BadgeResponse;

/// Value of the `type` field on a scan event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanEventType {
    BadgeScanned,
    AdminBadgeScanned,
}

/// The badge after the scan was persisted, or `{}` when there is nothing to show.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScanData {
    Badge(BadgeResponse),
    Empty(Empty),
}

/// Message pushed to every open client after a scan: `{type, data, success}`.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEvent {
    #[serde(rename = "type")]
    pub kind: ScanEventType,
    pub data: ScanData,
    pub success: bool,
}

impl ScanEvent {
    pub fn scanned(kind: ScanEventType, badge: BadgeResponse) -> Self {
        Self {
            kind,
            data: ScanData::Badge(badge),
            success: true,
        }
    }

    /// Failed scans are always reported as `badgeScanned`.
    pub fn failed() -> Self {
        Self {
            kind: ScanEventType::BadgeScanned,
            data: ScanData::Empty(Empty::default()),
            success: false,
        }
    }
}
