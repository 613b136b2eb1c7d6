use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::badge::Model as Badge;
use util::state::AppState;
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::badges::common::{BadgeResponse, RenameBadgeRequest};

/// PUT /api/badges/{badge_id}
///
/// Changes a badge holder's display name. Scan state is left untouched.
///
/// ### Request Body
/// ```json
/// { "name": "Alicia" }
/// ```
///
/// ### Responses
/// - `200 OK` `"Badge modified successfully"` with the updated badge
/// - `400 Bad Request` when `name` is missing or empty
/// - `404 Not Found` `"Badge not found"`
/// - `500 Internal Server Error`
pub async fn rename_badge(
    State(state): State<AppState>,
    Path(badge_id): Path<String>,
    Json(req): Json<RenameBadgeRequest>,
) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = common::format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    match Badge::rename(state.db(), &badge_id, &req.name).await {
        Ok(Some(badge)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                BadgeResponse::from(badge),
                "Badge modified successfully",
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
