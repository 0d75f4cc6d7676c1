//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User domain entity, stored under its email in the document.
///
/// The password is kept verbatim; it is an opaque string to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: i64,
}

impl User {
    /// Create a new user stamped with the current UTC time
    pub fn new(email: String, password: String, name: String, age: i64) -> Self {
        Self {
            created_at: Utc::now(),
            email,
            password,
            name,
            age,
        }
    }

    /// Build the replacement entry for an update, keeping the original creation time.
    pub fn replaced_with(&self, password: String, name: String, age: i64) -> Self {
        Self {
            created_at: self.created_at,
            email: self.email.clone(),
            password,
            name,
            age,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub email: String,
    pub name: String,
    pub age: i64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
            age: user.age,
            created_at: user.created_at,
        }
    }
}
