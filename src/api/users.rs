use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::UserProfile};

use super::AppState;

/// Handler for listing all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserProfile>>> {
    let users = state.auth.list_users().await?;
    Ok(Json(users))
}

/// Handler for fetching one user's profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.auth.get_user(id).await?;
    Ok(Json(profile))
}
