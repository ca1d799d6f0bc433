use std::sync::Arc;

use crate::db::UserRepository;
use crate::error::{AppError, AppResult};
use crate::models::UserProfile;
use crate::services::password::CredentialHasher;

/// Successful login result returned to the caller.
///
/// Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub user_id: i32,
    pub username: String,
}

/// Identity manager: registration and login over a user repository.
///
/// Argon2 hashing is CPU-bound, so both hash and verify run on the blocking
/// pool rather than a runtime worker.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: CredentialHasher,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: CredentialHasher) -> Self {
        Self { users, hasher }
    }

    /// Registers a new user and returns its assigned id.
    ///
    /// A taken username is a `Conflict`, both from the pre-check and from the
    /// store's unique constraint when a concurrent registration wins the race.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<i32> {
        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let hasher = self.hasher.clone();
        let plaintext = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))??;

        let user_id = self.users.insert(username, &password_hash).await?;

        tracing::info!(user_id, username = %username, "User registered");
        Ok(user_id)
    }

    /// Checks credentials and returns the user's id and name.
    ///
    /// An unknown username and a wrong password are distinct error kinds so
    /// the log can tell them apart; neither reveals more to the caller.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let hasher = self.hasher.clone();
        let plaintext = password.to_string();
        let stored = user.password_hash.clone();
        let is_valid = tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &stored))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))??;

        if !is_valid {
            return Err(AppError::Unauthorized("Invalid password".to_string()));
        }

        tracing::info!(user_id = user.id, username = %user.username, "Login successful");
        Ok(LoginOutcome {
            user_id: user.id,
            username: user.username,
        })
    }

    /// Fetches a user's public profile
    pub async fn get_user(&self, id: i32) -> AppResult<UserProfile> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserProfile::from(user))
    }

    /// Lists all users as public profiles
    pub async fn list_users(&self) -> AppResult<Vec<UserProfile>> {
        let users = self.users.list().await?;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::users::MockUserRepository;
    use crate::models::User;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn stored_user(id: i32, username: &str, password_hash: &str) -> User {
        User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        }
    }

    fn service(users: MockUserRepository) -> AuthService {
        AuthService::new(Arc::new(users), CredentialHasher::new())
    }

    #[tokio::test]
    async fn test_register_hashes_and_inserts() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .with(eq("alice"))
            .returning(|_| Ok(None));
        users
            .expect_insert()
            .withf(|username, hash| {
                // The stored credential is a PHC string, never the plaintext.
                username == "alice" && hash.starts_with("$argon2") && !hash.contains("pw1")
            })
            .returning(|_, _| Ok(1));

        let user_id = service(users).register("alice", "pw1").await.unwrap();
        assert_eq!(user_id, 1);
    }

    #[tokio::test]
    async fn test_register_existing_username_is_conflict() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("pw1").unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .with(eq("alice"))
            .returning(move |_| Ok(Some(stored_user(1, "alice", &hash))));

        let result = service(users).register("alice", "other").await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_lost_insert_race_is_conflict() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_insert()
            .returning(|_, _| Err(AppError::Conflict("User already exists".to_string())));

        let result = service(users).register("alice", "pw1").await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_login_with_correct_password() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("pw1").unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .with(eq("alice"))
            .returning(move |_| Ok(Some(stored_user(1, "alice", &hash))));

        let outcome = service(users).login("alice", "pw1").await.unwrap();
        assert_eq!(
            outcome,
            LoginOutcome {
                user_id: 1,
                username: "alice".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized_not_not_found() {
        let hasher = CredentialHasher::new();
        let hash = hasher.hash("pw1").unwrap();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .with(eq("alice"))
            .returning(move |_| Ok(Some(stored_user(1, "alice", &hash))));

        let result = service(users).login("alice", "wrong").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let result = service(users).login("nobody", "pw1").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_user_returns_profile_without_credential() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(stored_user(1, "alice", "$argon2id$stub"))));

        let profile = service(users).get_user(1).await.unwrap();
        assert_eq!(
            profile,
            UserProfile {
                id: 1,
                username: "alice".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let result = service(users).get_user(99).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
