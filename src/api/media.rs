use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::AppResult,
    models::{DiscoverQuery, MediaKind, MediaPage},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub page: Option<u32>,
}

/// Handler for popular movies
pub async fn popular_movies(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<Vec<Value>>> {
    let results = state
        .metadata
        .popular(MediaKind::Movie, params.page.unwrap_or(1))
        .await?;
    Ok(Json(results))
}

/// Handler for popular series
pub async fn popular_series(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<Vec<Value>>> {
    let results = state
        .metadata
        .popular(MediaKind::Series, params.page.unwrap_or(1))
        .await?;
    Ok(Json(results))
}

/// Handler for movie details
pub async fn movie_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let detail = state.metadata.details(MediaKind::Movie, id).await?;
    Ok(Json(detail))
}

/// Handler for series details
pub async fn series_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Value>> {
    let detail = state.metadata.details(MediaKind::Series, id).await?;
    Ok(Json(detail))
}

/// Handler for movie title search
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<MediaPage>> {
    let results = state
        .metadata
        .search(MediaKind::Movie, &params.query, params.page.unwrap_or(1))
        .await?;
    Ok(Json(results))
}

/// Handler for series title search
pub async fn search_series(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<MediaPage>> {
    let results = state
        .metadata
        .search(MediaKind::Series, &params.query, params.page.unwrap_or(1))
        .await?;
    Ok(Json(results))
}

/// Handler for filtered movie discovery
pub async fn discover_movies(
    State(state): State<AppState>,
    Query(params): Query<DiscoverQuery>,
) -> AppResult<Json<MediaPage>> {
    let page = state.metadata.discover(MediaKind::Movie, &params).await?;
    Ok(Json(page))
}

/// Handler for filtered series discovery
pub async fn discover_series(
    State(state): State<AppState>,
    Query(params): Query<DiscoverQuery>,
) -> AppResult<Json<MediaPage>> {
    let page = state.metadata.discover(MediaKind::Series, &params).await?;
    Ok(Json(page))
}
