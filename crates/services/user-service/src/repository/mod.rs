//! Repository layer for data access.
//!
//! [`UserRepository`] is the persistence contract the service depends on.
//! [`UserStore`] backs it with PostgreSQL through SeaORM and
//! [`InMemoryUserStore`] keeps records in process memory.

pub mod entities;
mod memory;
mod user_repository;

pub use memory::InMemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
