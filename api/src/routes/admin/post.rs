use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::not_blank;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::auth::{AuthError, credentials_match, generate_jwt};
use crate::response::ApiResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Badge ID is required"))]
    pub badge_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
}

/// POST /api/admin
///
/// Exchanges the admin badge identifier and password for a signed session
/// token. Send the token back in the `auth` header on admin routes.
///
/// ### Request Body
/// ```json
/// { "badgeId": "ADMIN", "password": "secret" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "token": "eyJ...", "expiresAt": "2025-05-23T19:00:00+00:00" },
///   "message": "Admin logged in successfully"
/// }
/// ```
///
/// - `400 Bad Request` (missing field)
/// - `401 Unauthorized` `"Authentication failed"`
/// - `500 Internal Server Error` (token signing failed)
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    if let Err(validation_errors) = req.validate() {
        let error_message = common::format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(error_message)),
        )
            .into_response();
    }

    if !credentials_match(&state, &req.badge_id, &req.password) {
        tracing::warn!(badge_id = %req.badge_id, "Admin login rejected");
        let err = AuthError::BadCredentials;
        return (err.status(), Json(ApiResponse::<()>::error(err.to_string()))).into_response();
    }

    match generate_jwt(&state) {
        Ok((token, expires_at)) => {
            tracing::info!("Admin logged in");
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    LoginResponse { token, expires_at },
                    "Admin logged in successfully",
                )),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to sign admin token");
            (e.status(), Json(ApiResponse::<()>::error(e.to_string()))).into_response()
        }
    }
}
