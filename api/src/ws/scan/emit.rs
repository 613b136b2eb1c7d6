// api/src/ws/scan/emit.rs
use util::ws::{ConnectionRegistry, emit};

use super::payload::{ScanEvent, ScanEventType};
use crate::routes::badges::common::BadgeResponse;

/* ------------ One-liner emit helpers ------------ */

pub async fn badge_scanned(ws: &ConnectionRegistry, kind: ScanEventType, badge: BadgeResponse) -> usize {
    emit(ws, &ScanEvent::scanned(kind, badge)).await
}

pub async fn scan_failed(ws: &ConnectionRegistry) -> usize {
    emit(ws, &ScanEvent::failed()).await
}
