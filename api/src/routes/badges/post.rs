use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::badge::Model as Badge;
use util::state::AppState;
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::badges::common::{BadgeResponse, CreateBadgeRequest};

/// POST /api/badges
///
/// Registers a new badge. Admin only.
///
/// ### Request Body
/// ```json
/// { "badgeId": "A1", "name": "Alice" }
/// ```
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": { "badgeId": "A1", "name": "Alice", "lastScanned": null, "isScanned": false },
///   "message": "Badge created successfully"
/// }
/// ```
///
/// - `400 Bad Request` (missing field, or the identifier is already taken)
/// ```json
/// { "success": false, "data": null, "message": "Badge with the given ID already exists" }
/// ```
///
/// - `500 Internal Server Error`
pub async fn create_badge(
    State(state): State<AppState>,
    Json(req): Json<CreateBadgeRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = common::format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    let db = state.db();

    match Badge::find_by_badge_id(db, &req.badge_id).await {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(
                    "Badge with the given ID already exists",
                )),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
            )
                .into_response();
        }
    }

    match Badge::create(db, &req.badge_id, &req.name).await {
        Ok(badge) => {
            tracing::info!(badge_id = %badge.badge_id, "Badge created");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    BadgeResponse::from(badge),
                    "Badge created successfully",
                )),
            )
                .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
