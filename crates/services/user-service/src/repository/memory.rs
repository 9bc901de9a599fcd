//! In-memory implementation of UserRepository (for development/testing).

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult, OptionExt};
use domain::{User, UserId, UserInput};

use super::UserRepository;

#[derive(Debug)]
struct Table {
    next_id: UserId,
    rows: BTreeMap<UserId, User>,
}

impl Default for Table {
    fn default() -> Self {
        // Ids start at 1 like a database sequence.
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Process-local user store with sequence-style ids.
///
/// Clones share the same table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, input: UserInput) -> AppResult<User> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::internal("user id sequence exhausted"))?;

        let user = User::from_input(id, input);
        table.rows.insert(id, user.clone());

        tracing::info!(user_id = id, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or_not_found()
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, id: UserId, input: UserInput) -> AppResult<User> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or(AppError::NotFound)?;

        *row = User::from_input(id, input);
        let updated = row.clone();

        tracing::info!(user_id = id, "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        let mut table = self.table.write().await;

        if table.rows.remove(&id).is_none() {
            return Err(AppError::NotFound);
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserInput {
        UserInput::new("Alice", "a@example.com", 25)
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserStore::new();

        let created = repo.create(alice()).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(UserInput::from(fetched), alice());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserStore::new();

        let first = repo.create(alice()).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(alice()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = InMemoryUserStore::new();

        assert!(matches!(repo.get_by_id(9).await, Err(AppError::NotFound)));
        assert!(matches!(
            repo.update(9, alice()).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(repo.delete(9).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = InMemoryUserStore::new();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_update_overwrites() {
        let repo = InMemoryUserStore::new();
        let created = repo.create(alice()).await.unwrap();

        for age in [30, 31, 32] {
            let input = UserInput::new("Updated", "u@example.com", age);
            repo.update(created.id, input.clone()).await.unwrap();

            let fetched = repo.get_by_id(created.id).await.unwrap();
            assert_eq!(fetched.id, created.id);
            assert_eq!(UserInput::from(fetched), input);
        }
    }

    #[tokio::test]
    async fn test_deleted_user_stays_gone() {
        let repo = InMemoryUserStore::new();
        let created = repo.create(alice()).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(matches!(repo.get_by_id(created.id).await, Err(AppError::NotFound)));
        assert!(matches!(repo.delete(created.id).await, Err(AppError::NotFound)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_table() {
        let repo = InMemoryUserStore::new();
        let other = repo.clone();

        let created = repo.create(alice()).await.unwrap();
        assert_eq!(other.get_by_id(created.id).await.unwrap(), created);
    }
}
