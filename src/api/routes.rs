use axum::{
    http::StatusCode,
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::{auth, favorites, media, users, AppState};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

/// API routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        // Identity
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/users", get(users::list_users))
        .route("/users/:id", get(users::get_user))
        // Catalog
        .route("/movies/popular", get(media::popular_movies))
        .route("/movies/:id", get(media::movie_details))
        .route("/series/popular", get(media::popular_series))
        .route("/series/:id", get(media::series_details))
        .route("/search/movies", get(media::search_movies))
        .route("/search/series", get(media::search_series))
        .route("/discover/movie", get(media::discover_movies))
        .route("/discover/tv", get(media::discover_series))
        // Favorites
        .route("/favorites", post(favorites::add_favorite))
        .route(
            "/favorites/check/:user_id/:tmdb_id",
            get(favorites::check_favorite),
        )
        .route("/favorites/:user_id", get(favorites::list_favorites))
        .route(
            "/favorites/:user_id/:tmdb_id",
            delete(favorites::remove_favorite),
        )
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
