use serde::{Deserialize, Serialize};

/// Claims carried by an admin session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdminClaims {
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    pub iat: usize,
    pub exp: usize,
}

/// Verified claims, inserted into request extensions by [`crate::auth::guards::allow_admin`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub AdminClaims);
