//! User repository contract and its SeaORM implementation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{User, UserId, UserInput};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Each call performs exactly one store operation. Absent records are
/// reported as [`AppError::NotFound`]; every other failure is a storage
/// error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the id
    async fn create(&self, input: UserInput) -> AppResult<User>;

    /// Find user by ID
    async fn get_by_id(&self, id: UserId) -> AppResult<User>;

    /// List all users. An empty store yields an empty vector.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Overwrite every editable field of an existing user
    async fn update(&self, id: UserId, input: UserInput) -> AppResult<User>;

    /// Permanently delete user from the store
    async fn delete(&self, id: UserId) -> AppResult<()>;
}

/// PostgreSQL-backed implementation of UserRepository.
///
/// Every store call runs under `timeout`. When it expires the pending
/// query future is dropped, which aborts it in the driver.
pub struct UserStore {
    db: Arc<DatabaseConnection>,
    timeout: Duration,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>, timeout: Duration) -> Self {
        Self {
            db: db.into(),
            timeout,
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, input: UserInput) -> AppResult<User> {
        let active_model = ActiveModel {
            id: ActiveValue::NotSet,
            full_name: Set(input.full_name),
            email: Set(input.email),
            age: Set(input.age),
        };

        let model =
            with_deadline(self.timeout, "create", active_model.insert(self.db.as_ref())).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(User::from(model))
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        let result = with_deadline(
            self.timeout,
            "get_by_id",
            UserEntity::find_by_id(id).one(self.db.as_ref()),
        )
        .await?;

        result.map(User::from).ok_or_not_found()
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = with_deadline(
            self.timeout,
            "list",
            UserEntity::find()
                .order_by_asc(user::Column::Id)
                .all(self.db.as_ref()),
        )
        .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn update(&self, id: UserId, input: UserInput) -> AppResult<User> {
        // Single UPDATE ... RETURNING keyed on the primary key; zero matched
        // rows come back as DbErr::RecordNotUpdated.
        let active_model = ActiveModel {
            id: ActiveValue::Unchanged(id),
            full_name: Set(input.full_name),
            email: Set(input.email),
            age: Set(input.age),
        };

        let model =
            with_deadline(self.timeout, "update", active_model.update(self.db.as_ref())).await?;

        tracing::info!(user_id = id, "Updated user");
        Ok(User::from(model))
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        let result = with_deadline(
            self.timeout,
            "delete",
            UserEntity::delete_by_id(id).exec(self.db.as_ref()),
        )
        .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}

/// Run a store call under a deadline, translating driver errors.
async fn with_deadline<T, F>(limit: Duration, operation: &'static str, call: F) -> AppResult<T>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(map_db_err),
        Err(_) => {
            tracing::warn!(operation, ?limit, "Store call exceeded its deadline");
            Err(AppError::Cancelled(limit))
        }
    }
}

fn map_db_err(err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => AppError::Database(other),
    }
}
