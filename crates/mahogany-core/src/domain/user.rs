use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - reserved for a future admin login, no route exposes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// Input for creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl User {
    /// Create a user with a generated ID.
    pub fn new(input: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: input.username,
            password: input.password,
        }
    }
}
