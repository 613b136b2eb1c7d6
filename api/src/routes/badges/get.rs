use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::badge::Model as Badge;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::badges::common::BadgeResponse;

/// GET /api/badges
///
/// Lists every badge in insertion order, the admin badge included.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "badgeId": "ADMIN", "name": "admin", "lastScanned": null, "isScanned": false }
///   ],
///   "message": "Badges retrieved successfully"
/// }
/// ```
///
/// - `500 Internal Server Error`
pub async fn list_badges(State(state): State<AppState>) -> Response {
    match Badge::find_all(state.db()).await {
        Ok(badges) => {
            let data: Vec<BadgeResponse> = badges.into_iter().map(BadgeResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Badges retrieved successfully")),
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

/// GET /api/badges/{badge_id}
///
/// ### Responses
/// - `200 OK` with the badge
/// - `404 Not Found` `"Badge not found"`
/// - `500 Internal Server Error`
pub async fn get_badge(
    State(state): State<AppState>,
    Path(badge_id): Path<String>,
) -> Response {
    match Badge::find_by_badge_id(state.db(), &badge_id).await {
        Ok(Some(badge)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                BadgeResponse::from(badge),
                "Badge retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Badge not found")),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!("Database error: {e}"))),
        )
            .into_response(),
    }
}
