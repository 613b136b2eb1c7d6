use axum::http::HeaderMap;

/// Header the admin client puts its session token in.
pub const AUTH_HEADER: &str = "auth";

/// Reads the session token from the `auth` header.
///
/// The token is sent raw; a `Bearer ` prefix is tolerated and stripped.
/// Blank values count as missing.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(AUTH_HEADER)?.to_str().ok()?.trim();
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    (!token.is_empty()).then_some(token)
}
