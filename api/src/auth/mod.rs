pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AdminClaims, AuthUser};

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use thiserror::Error;
use util::state::AppState;

/// Why a request could not be authenticated as the admin.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unauthorized - Token not provided")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,
    #[error("User is not an admin")]
    NotAdmin,
    #[error("Authentication failed")]
    BadCredentials,
    #[error("Token encoding failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("Token lifetime of {0} minutes is out of range")]
    Lifetime(i64),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Signing(_) | AuthError::Lifetime(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Plain comparison against the single configured admin badge/password pair.
pub fn credentials_match(state: &AppState, badge_id: &str, password: &str) -> bool {
    let admin = state.admin();
    badge_id == admin.badge_id && password == admin.password
}

/// Generates an admin session token and its expiry timestamp.
pub fn generate_jwt(state: &AppState) -> Result<(String, String), AuthError> {
    let now = Utc::now();
    let minutes = state.jwt_duration_minutes();
    let expiry = Duration::try_minutes(minutes)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or(AuthError::Lifetime(minutes))?;

    let claims = AdminClaims {
        is_admin: true,
        iat: now.timestamp().max(0) as usize,
        exp: expiry.timestamp().max(0) as usize,
    };

    let token = encode(&Header::default(), &claims, state.encoding_key()).map_err(AuthError::Signing)?;

    Ok((token, expiry.to_rfc3339()))
}

/// Checks signature and expiry, then requires the `isAdmin` claim.
pub fn verify_jwt(state: &AppState, token: &str) -> Result<AdminClaims, AuthError> {
    let data = decode::<AdminClaims>(
        token,
        state.decoding_key(),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|_| AuthError::InvalidToken)?;

    if !data.claims.is_admin {
        return Err(AuthError::NotAdmin);
    }

    Ok(data.claims)
}
