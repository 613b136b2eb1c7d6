use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::services::scan::{ScanError, process_scan};

/// GET /api/scan/{badge_id}
///
/// Toggles the badge's presence flag and broadcasts the result to every open
/// WebSocket client. Unknown identifiers are broadcast as a failed scan too.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "badgeId": "A1", "name": "Alice", "lastScanned": "2025-01-15T10:00:00+00:00", "isScanned": true },
///   "message": "Badge scanned successfully"
/// }
/// ```
///
/// - `400 Bad Request` `"Badge ID is required."`
/// - `404 Not Found` `"Badge not found"`
/// - `500 Internal Server Error`
pub async fn scan_badge(
    State(state): State<AppState>,
    Path(badge_id): Path<String>,
) -> Response {
    match process_scan(state.db(), state.ws(), state.admin_badge_id(), &badge_id).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ApiResponse::success(outcome.badge, "Badge scanned successfully")),
        )
            .into_response(),
        Err(e) => (e.status(), Json(ApiResponse::<()>::error(e.to_string()))).into_response(),
    }
}

/// GET /api/scan
///
/// A scan with no identifier at all.
pub async fn scan_without_id() -> (StatusCode, Json<ApiResponse<()>>) {
    let err = ScanError::MissingId;
    (err.status(), Json(ApiResponse::error(err.to_string())))
}
