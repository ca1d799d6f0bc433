use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::db::{FavoriteRepository, PgFavoriteRepository, PgUserRepository, UserRepository};
use crate::services::providers::{tmdb::TmdbProvider, MetadataProvider};
use crate::services::{AuthService, CredentialHasher, FavoritesService};

/// Shared application state
///
/// Holds the service layer behind `Arc`s; handlers share no other mutable
/// state, so the persistence layer is the only point of contention.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub favorites: FavoritesService,
    pub metadata: Arc<dyn MetadataProvider>,
}

impl AppState {
    /// Creates application state from explicit capabilities.
    ///
    /// Tests inject in-memory repositories and canned providers here.
    pub fn new(
        users: Arc<dyn UserRepository>,
        favorites: Arc<dyn FavoriteRepository>,
        metadata: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            auth: AuthService::new(users, CredentialHasher::new()),
            favorites: FavoritesService::new(favorites),
            metadata,
        }
    }

    /// Creates production state: Postgres repositories and the TMDB provider
    pub fn from_config(pool: PgPool, config: &Config) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgFavoriteRepository::new(pool)),
            Arc::new(TmdbProvider::new(
                config.tmdb_api_key.clone(),
                config.tmdb_api_url.clone(),
                config.tmdb_language.clone(),
            )),
        )
    }
}
