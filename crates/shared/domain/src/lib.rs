//! Domain layer - Core business entities.
//!
//! This crate contains the user resource shared by the repository,
//! service and HTTP layers. It has no infrastructure dependencies.

pub mod user;

pub use user::{User, UserId, UserInput};
