use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{Favorite, FavoriteStatus, MediaKind},
};

use super::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub user_id: Option<i32>,
    pub tmdb_id: Option<i32>,
    #[serde(rename = "type")]
    pub kind: Option<MediaKind>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Handler for adding a favorite
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(request): Json<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (Some(user_id), Some(tmdb_id), Some(kind)) = (request.user_id, request.tmdb_id, request.kind)
    else {
        return Err(AppError::InvalidInput(
            "User ID, tmdbId, and type are required".to_string(),
        ));
    };

    state.favorites.add(user_id, tmdb_id, kind).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Added to favorites".to_string(),
        }),
    ))
}

/// Handler for checking whether an item is a favorite
pub async fn check_favorite(
    State(state): State<AppState>,
    Path((user_id, tmdb_id)): Path<(i32, i32)>,
) -> AppResult<Json<FavoriteStatus>> {
    let status = state.favorites.check(user_id, tmdb_id).await?;
    Ok(Json(status))
}

/// Handler for listing a user's favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Favorite>>> {
    let user_id: i32 = user_id
        .parse()
        .map_err(|_| AppError::InvalidInput("Invalid user ID format".to_string()))?;

    let favorites = state.favorites.list(user_id).await?;
    Ok(Json(favorites))
}

/// Handler for removing a favorite
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, tmdb_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    state.favorites.remove(user_id, tmdb_id).await?;

    Ok(Json(MessageResponse {
        message: "Removed from favorites".to_string(),
    }))
}
