//! Post domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single authored text entry owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub user_email: String,
    pub text: String,
}

impl Post {
    /// Create a new post with a freshly generated identifier
    pub fn new(user_email: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            user_email,
            text,
        }
    }

    /// Check whether this post is attributed to the given email
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.user_email == email
    }
}
