use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::User;

/// Durable store of user records.
///
/// Username uniqueness is enforced by the store; implementations translate
/// their uniqueness violation into [`AppError::Conflict`] so callers never see
/// storage-specific error text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns its assigned id
    async fn insert(&self, username: &str, password_hash: &str) -> AppResult<i32>;

    /// Looks up a user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Looks up a user by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Returns all users
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Postgres-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, username: &str, password_hash: &str) -> AppResult<i32> {
        let row = sqlx::query_as::<_, (i32,)>(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("User already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.0)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
