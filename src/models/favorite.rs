use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::media::MediaKind;

/// A favorite row: one external catalog item marked by one user.
///
/// The pair (user_id, tmdb_id) is unique. The media kind is not part of the
/// key, matching the stored constraint.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub tmdb_id: i32,
    #[serde(rename = "type")]
    pub media_kind: MediaKind,
    pub created_at: DateTime<Utc>,
}

/// Result of a favorite lookup
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_id: Option<i32>,
}
