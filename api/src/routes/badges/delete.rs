use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::badge::Model as Badge;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::badges::common::DeleteAllResponse;

/// DELETE /api/badges/{badge_id}
///
/// Removes a single badge. The reserved admin badge can never be removed.
///
/// ### Responses
/// - `200 OK` `"Badge deleted successfully"`
/// - `403 Forbidden` `"The admin badge cannot be deleted"`
/// - `404 Not Found` `"Badge not found"`
/// - `500 Internal Server Error`
pub async fn delete_badge(
    State(state): State<AppState>,
    Path(badge_id): Path<String>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    if badge_id == state.admin_badge_id() {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("The admin badge cannot be deleted")),
        );
    }

    match Badge::delete_by_badge_id(state.db(), &badge_id).await {
        Ok(true) => {
            tracing::info!(badge_id = %badge_id, "Badge deleted");
            (
                StatusCode::OK,
                Json(ApiResponse::success_without_data("Badge deleted successfully")),
            )
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Badge not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}

/// DELETE /api/badges
///
/// Removes every badge except the reserved admin badge.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "deleted": 3 },
///   "message": "All badges deleted successfully"
/// }
/// ```
///
/// - `500 Internal Server Error`
pub async fn delete_all_badges(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<DeleteAllResponse>>) {
    match Badge::delete_all_except(state.db(), state.admin_badge_id()).await {
        Ok(deleted) => {
            tracing::info!(deleted, "Deleted all non-admin badges");
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    DeleteAllResponse { deleted },
                    "All badges deleted successfully",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Database error: {e}"))),
        ),
    }
}
