use std::sync::Arc;

use crate::db::FavoriteRepository;
use crate::error::{AppError, AppResult};
use crate::models::{Favorite, FavoriteStatus, MediaKind};

/// Favorites ledger: add/remove/check/list over a favorite repository.
///
/// The pre-insert lookup exists only for the friendly conflict message; the
/// store's uniqueness constraint is the authoritative guard, so a lost
/// check-then-insert race still resolves to `Conflict`.
#[derive(Clone)]
pub struct FavoritesService {
    favorites: Arc<dyn FavoriteRepository>,
}

impl FavoritesService {
    pub fn new(favorites: Arc<dyn FavoriteRepository>) -> Self {
        Self { favorites }
    }

    /// Marks an external item as a favorite of the user.
    ///
    /// Returns the new favorite's id. Adding a pair that already exists is a
    /// `Conflict` regardless of the media kind on either entry.
    pub async fn add(&self, user_id: i32, tmdb_id: i32, kind: MediaKind) -> AppResult<i32> {
        if user_id <= 0 || tmdb_id <= 0 {
            return Err(AppError::InvalidInput(
                "User ID, tmdbId, and type are required".to_string(),
            ));
        }

        if self.favorites.find(user_id, tmdb_id).await?.is_some() {
            return Err(AppError::Conflict("Already in favorites".to_string()));
        }

        let favorite_id = self.favorites.insert(user_id, tmdb_id, kind).await?;

        tracing::info!(user_id, tmdb_id, kind = %kind, favorite_id, "Added to favorites");
        Ok(favorite_id)
    }

    /// Removes the favorite for a (user, item) pair.
    ///
    /// Idempotent: removing an absent pair succeeds and changes nothing.
    pub async fn remove(&self, user_id: i32, tmdb_id: i32) -> AppResult<()> {
        let removed = self.favorites.delete(user_id, tmdb_id).await?;

        tracing::info!(user_id, tmdb_id, removed, "Removed from favorites");
        Ok(())
    }

    /// Pure lookup: is this item a favorite of the user?
    pub async fn check(&self, user_id: i32, tmdb_id: i32) -> AppResult<FavoriteStatus> {
        let favorite = self.favorites.find(user_id, tmdb_id).await?;

        Ok(match favorite {
            Some(favorite) => FavoriteStatus {
                is_favorite: true,
                favorite_id: Some(favorite.id),
            },
            None => FavoriteStatus {
                is_favorite: false,
                favorite_id: None,
            },
        })
    }

    /// Lists all favorites for a user, ordered by id
    pub async fn list(&self, user_id: i32) -> AppResult<Vec<Favorite>> {
        self.favorites.list_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::Mutex;

    /// In-memory substitute for the Postgres repository. Insert checks and
    /// appends under a single lock, mirroring the store-level constraint.
    #[derive(Default)]
    struct InMemoryFavoriteRepository {
        rows: Mutex<Vec<Favorite>>,
    }

    #[async_trait]
    impl FavoriteRepository for InMemoryFavoriteRepository {
        async fn insert(&self, user_id: i32, tmdb_id: i32, kind: MediaKind) -> AppResult<i32> {
            let mut rows = self.rows.lock().await;
            if rows
                .iter()
                .any(|row| row.user_id == user_id && row.tmdb_id == tmdb_id)
            {
                return Err(AppError::Conflict("Already in favorites".to_string()));
            }

            let id = rows.len() as i32 + 1;
            rows.push(Favorite {
                id,
                user_id,
                tmdb_id,
                media_kind: kind,
                created_at: Utc::now(),
            });
            Ok(id)
        }

        async fn find(&self, user_id: i32, tmdb_id: i32) -> AppResult<Option<Favorite>> {
            let rows = self.rows.lock().await;
            Ok(rows
                .iter()
                .find(|row| row.user_id == user_id && row.tmdb_id == tmdb_id)
                .cloned())
        }

        async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>> {
            let rows = self.rows.lock().await;
            let mut matching: Vec<Favorite> = rows
                .iter()
                .filter(|row| row.user_id == user_id)
                .cloned()
                .collect();
            matching.sort_by_key(|row| row.id);
            Ok(matching)
        }

        async fn delete(&self, user_id: i32, tmdb_id: i32) -> AppResult<u64> {
            let mut rows = self.rows.lock().await;
            let before = rows.len();
            rows.retain(|row| !(row.user_id == user_id && row.tmdb_id == tmdb_id));
            Ok((before - rows.len()) as u64)
        }
    }

    fn service() -> FavoritesService {
        FavoritesService::new(Arc::new(InMemoryFavoriteRepository::default()))
    }

    #[tokio::test]
    async fn test_add_then_check_returns_matching_id() {
        let service = service();

        let favorite_id = service.add(1, 550, MediaKind::Movie).await.unwrap();
        let status = service.check(1, 550).await.unwrap();

        assert_eq!(
            status,
            FavoriteStatus {
                is_favorite: true,
                favorite_id: Some(favorite_id),
            }
        );
    }

    #[tokio::test]
    async fn test_duplicate_add_is_conflict_even_with_different_kind() {
        let service = service();

        service.add(1, 550, MediaKind::Movie).await.unwrap();
        let result = service.add(1, 550, MediaKind::Series).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(service.list(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_same_item_for_different_users_is_allowed() {
        let service = service();

        service.add(1, 550, MediaKind::Movie).await.unwrap();
        service.add(2, 550, MediaKind::Movie).await.unwrap();

        assert_eq!(service.list(1).await.unwrap().len(), 1);
        assert_eq!(service.list(2).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_absent_pair_succeeds() {
        let service = service();

        service.remove(1, 550).await.unwrap();
        assert!(service.list(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_after_add_clears_check() {
        let service = service();

        service.add(1, 550, MediaKind::Movie).await.unwrap();
        service.remove(1, 550).await.unwrap();

        let status = service.check(1, 550).await.unwrap();
        assert_eq!(
            status,
            FavoriteStatus {
                is_favorite: false,
                favorite_id: None,
            }
        );
    }

    #[tokio::test]
    async fn test_non_positive_ids_are_invalid() {
        let service = service();

        let result = service.add(0, 550, MediaKind::Movie).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        let result = service.add(1, 0, MediaKind::Movie).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let service = service();

        service.add(7, 300, MediaKind::Series).await.unwrap();
        service.add(7, 100, MediaKind::Movie).await.unwrap();
        service.add(7, 200, MediaKind::Movie).await.unwrap();

        let favorites = service.list(7).await.unwrap();
        let ids: Vec<i32> = favorites.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_concurrent_adds_yield_one_row_and_one_conflict() {
        let service = service();

        let (first, second) = tokio::join!(
            service.add(7, 99, MediaKind::Movie),
            service.add(7, 99, MediaKind::Movie),
        );

        let results = [first, second];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict(_))))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 1);
        assert_eq!(service.list(7).await.unwrap().len(), 1);
    }
}
