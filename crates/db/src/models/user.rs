//! User directory models. The API exposes a read-only directory;
//! `api_allowed` gates every write operation.

use playa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub api_allowed: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a user (admin/bootstrap path).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub api_allowed: bool,
}

/// Public directory shape. The `api_allowed` flag stays internal.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        PublicUser {
            id: u.id,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            is_active: u.is_active,
        }
    }
}
