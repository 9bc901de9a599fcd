//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// Store-assigned user identifier
pub type UserId = i64;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier, assigned by the store
    #[cfg_attr(feature = "openapi", schema(value_type = i64, example = 1))]
    pub id: UserId,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub full_name: String,
    /// Contact address
    #[cfg_attr(feature = "openapi", schema(example = "a@example.com"))]
    pub email: String,
    /// Age in years, stored as given
    #[cfg_attr(feature = "openapi", schema(example = 25))]
    pub age: i32,
}

impl User {
    /// Build a stored user from an input payload and the id the store assigned.
    pub fn from_input(id: UserId, input: UserInput) -> Self {
        Self {
            id,
            full_name: input.full_name,
            email: input.email,
            age: input.age,
        }
    }
}

/// Editable user fields, used as the body of both create and update.
///
/// Any `id` sent by a client is not part of this type and is dropped
/// during deserialization: create ids come from the store, update ids
/// come from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserInput {
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub full_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "a@example.com"))]
    pub email: String,
    #[cfg_attr(feature = "openapi", schema(example = 25))]
    pub age: i32,
}

impl UserInput {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            age,
        }
    }
}

impl From<User> for UserInput {
    fn from(user: User) -> Self {
        Self {
            full_name: user.full_name,
            email: user.email,
            age: user.age,
        }
    }
}
