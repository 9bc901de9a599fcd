//! User service - Handles user-related use cases.
//!
//! SOLID (SRP): Handles user-related use cases only.
//!
//! Every operation delegates to exactly one repository call and returns
//! its result unchanged, errors included, so callers can tell
//! `AppError::NotFound` apart from storage failures. Input rules, if
//! any are ever needed, belong here before the repository call.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{User, UserId, UserInput};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user; the store assigns the id
    async fn create_user(&self, input: UserInput) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Replace all editable fields of a user
    async fn update_user(&self, id: UserId, input: UserInput) -> AppResult<User>;

    /// Delete user permanently
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: UserInput) -> AppResult<User> {
        self.repo.create(input).await
    }

    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.get_by_id(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn update_user(&self, id: UserId, input: UserInput) -> AppResult<User> {
        self.repo.update(id, input).await
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use mockall::predicate::eq;
    use std::time::Duration;

    use crate::repository::MockUserRepository;

    fn alice() -> UserInput {
        UserInput::new("Alice", "a@example.com", 25)
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user_returns_repository_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .with(eq(alice()))
            .times(1)
            .returning(|input| Ok(User::from_input(1, input)));

        let created = service(repo).create_user(alice()).await.unwrap();

        assert_eq!(created, User::from_input(1, alice()));
    }

    #[tokio::test]
    async fn test_create_user_passes_storage_error_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::internal("disk full")));

        let err = service(repo).create_user(alice()).await.unwrap_err();

        assert!(matches!(err, AppError::Internal(ref msg) if msg == "disk full"));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(User::from_input(id, alice())));

        let user = service(repo).get_user(1).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.full_name, "Alice");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id().returning(|_| Err(AppError::NotFound));

        let result = service(repo).get_user(2).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_user_cancelled_stays_distinct_from_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(AppError::Cancelled(Duration::from_secs(10))));

        let err = service(repo).get_user(1).await.unwrap_err();

        assert!(err.is_storage());
        assert!(!matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![User::from_input(1, alice())]));

        let users = service(repo).list_users().await.unwrap();

        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        assert!(service(repo).list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_user_uses_path_id() {
        let updated = UserInput::new("Updated", "u@example.com", 30);

        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(eq(1), eq(updated.clone()))
            .times(1)
            .returning(|id, input| Ok(User::from_input(id, input)));

        let user = service(repo).update_user(1, updated).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.full_name, "Updated");
        assert_eq!(user.email, "u@example.com");
        assert_eq!(user.age, 30);
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_, _| Err(AppError::NotFound));

        let result = service(repo).update_user(2, alice()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().with(eq(1)).times(1).returning(|_| Ok(()));

        assert!(service(repo).delete_user(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));

        let result = service(repo).delete_user(2).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
