use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Favorite, MediaKind};

/// Durable store of (user, external item) pairs.
///
/// The store's `UNIQUE (user_id, tmdb_id)` constraint is the authoritative
/// uniqueness guard: a concurrent insert losing the race observes the
/// violation and reports [`AppError::Conflict`], never a duplicate row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Inserts a favorite and returns its assigned id
    async fn insert(&self, user_id: i32, tmdb_id: i32, kind: MediaKind) -> AppResult<i32>;

    /// Looks up the favorite for a (user, item) pair
    async fn find(&self, user_id: i32, tmdb_id: i32) -> AppResult<Option<Favorite>>;

    /// Returns all favorites for a user, ordered by id
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>>;

    /// Deletes the favorite for a (user, item) pair, returning the number of
    /// rows removed. Deleting an absent pair is not an error.
    async fn delete(&self, user_id: i32, tmdb_id: i32) -> AppResult<u64>;
}

/// Postgres-backed favorite repository
#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn insert(&self, user_id: i32, tmdb_id: i32, kind: MediaKind) -> AppResult<i32> {
        let row = sqlx::query_as::<_, (i32,)>(
            "INSERT INTO favorites (user_id, tmdb_id, media_kind) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user_id)
        .bind(tmdb_id)
        .bind(kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Already in favorites".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.0)
    }

    async fn find(&self, user_id: i32, tmdb_id: i32) -> AppResult<Option<Favorite>> {
        let favorite = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, tmdb_id, media_kind, created_at FROM favorites \
             WHERE user_id = $1 AND tmdb_id = $2",
        )
        .bind(user_id)
        .bind(tmdb_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, tmdb_id, media_kind, created_at FROM favorites \
             WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    async fn delete(&self, user_id: i32, tmdb_id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND tmdb_id = $2")
            .bind(user_id)
            .bind(tmdb_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
