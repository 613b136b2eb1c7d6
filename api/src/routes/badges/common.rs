use db::models::badge::Model as BadgeModel;
use common::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire representation of a badge. The surrogate key is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeResponse {
    pub badge_id: String,
    pub name: String,
    pub last_scanned: Option<String>,
    pub is_scanned: bool,
}

impl From<BadgeModel> for BadgeResponse {
    fn from(badge: BadgeModel) -> Self {
        Self {
            badge_id: badge.badge_id,
            name: badge.name,
            last_scanned: badge.last_scanned.map(|t| t.to_rfc3339()),
            is_scanned: badge.is_scanned,
        }
    }
}

/// Missing fields deserialize as empty strings so validation, not the JSON
/// extractor, reports them. Identifiers are stored exactly as sent.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBadgeRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Badge ID is required"))]
    pub badge_id: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RenameBadgeRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Default, Serialize)]
pub struct DeleteAllResponse {
    pub deleted: u64,
}
