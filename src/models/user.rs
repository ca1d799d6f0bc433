use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user row as stored in the database.
///
/// Deliberately not `Serialize`: the password hash must never reach a caller.
/// Responses go through [`UserProfile`] instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The caller-facing view of a user
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
