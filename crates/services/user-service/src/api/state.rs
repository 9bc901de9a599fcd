//! Application state - Dependency injection container.

use std::sync::Arc;
use std::time::Duration;

use crate::infra::Database;
use crate::repository::{InMemoryUserStore, UserRepository, UserStore};
use crate::service::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database handle, used by the health check when present
    pub database: Option<Database>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            database: None,
        }
    }

    /// Wire the SQL-backed repository and service onto a database pool.
    pub fn from_database(database: Database, request_timeout: Duration) -> Self {
        let repo: Arc<dyn UserRepository> =
            Arc::new(UserStore::new(database.get_connection(), request_timeout));
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(repo));

        Self {
            user_service,
            database: Some(database),
        }
    }

    /// Wire the service onto a fresh in-memory store.
    pub fn in_memory() -> Self {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserStore::new());
        Self::new(Arc::new(UserManager::new(repo)))
    }
}
