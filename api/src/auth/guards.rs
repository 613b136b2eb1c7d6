use crate::auth::{AuthUser, extractors::token_from_headers, verify_jwt, AuthError};
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use util::state::AppState;

/// Admin-only guard.
///
/// Reads the token from the `auth` header, verifies it and requires the
/// `isAdmin` claim. On success the claims are available to handlers as
/// `Extension<AuthUser>`.
pub async fn allow_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<()>>)> {
    let verified = token_from_headers(req.headers())
        .ok_or(AuthError::MissingToken)
        .and_then(|token| verify_jwt(&state, token));

    match verified {
        Ok(claims) => {
            req.extensions_mut().insert(AuthUser(claims));
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), reason = %e, "Rejected admin request");
            Err((e.status(), Json(ApiResponse::error(e.to_string()))))
        }
    }
}
