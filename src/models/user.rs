use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use std::fmt;

use super::UserRole;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserCreate {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub id: Uuid,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum UserIden {
    Id(Uuid),
    Username(String),
}

impl User {
    /// Only active accounts may authenticate or hold a session.
    pub fn can_sign_in(&self) -> bool {
        self.is_active
    }
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password_hash.is_none()
            && self.role.is_none()
            && self.is_active.is_none()
    }

    /// True when applying this update to `actor_id` would lock the actor out.
    pub fn deactivates(&self, actor_id: Uuid) -> bool {
        self.id == actor_id && self.is_active == Some(false)
    }
}

impl fmt::Display for UserIden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserIden::Id(id) => write!(f, "ID {}", id),
            UserIden::Username(username) => {
                write!(f, "username '{}'", username)
            }
        }
    }
}

impl From<Uuid> for UserIden {
    fn from(id: Uuid) -> Self {
        UserIden::Id(id)
    }
}

impl From<String> for UserIden {
    fn from(username: String) -> Self {
        UserIden::Username(username)
    }
}

impl From<&String> for UserIden {
    fn from(username: &String) -> Self {
        UserIden::Username(username.clone())
    }
}

impl From<&str> for UserIden {
    fn from(username: &str) -> Self {
        UserIden::Username(username.to_string())
    }
}
