//! The persisted root object holding every user and post.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Post, User};

/// On-disk document: users keyed by email, posts keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub users: BTreeMap<String, User>,
    pub posts: BTreeMap<String, Post>,
}

impl Document {
    /// Check whether a user with this email exists
    pub fn has_user(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }

    /// Posts owned by `email`, oldest first (ties broken by id).
    pub fn posts_by_owner(&self, email: &str) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .values()
            .filter(|p| p.is_owned_by(email))
            .cloned()
            .collect();
        posts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        posts
    }
}
