//! Application services layer.
//!
//! Services depend on the repository trait, never on a concrete store.

mod user_service;

pub use user_service::{UserManager, UserService};
