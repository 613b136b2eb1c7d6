use axum::{Extension, Json, http::StatusCode};

use crate::auth::AuthUser;
use crate::response::ApiResponse;

/// GET /api/admin/checkAuth
///
/// Confirms that the `auth` header carries a valid admin token. The guard has
/// already done the work by the time this runs.
///
/// ### Responses
/// - `200 OK` `"Admin is authenticated"`
/// - `401 Unauthorized` from the guard
pub async fn check_auth(
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    tracing::debug!(exp = claims.exp, "Admin session checked");
    (
        StatusCode::OK,
        Json(ApiResponse::success_without_data("Admin is authenticated")),
    )
}
