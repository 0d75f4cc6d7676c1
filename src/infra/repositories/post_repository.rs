//! Post repository backed by the JSON document store.

use async_trait::async_trait;

use crate::domain::Post;
use crate::infra::store::{JsonStore, StoreResult};

#[cfg(test)]
use mockall::automock;

/// Post repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a post for an existing user
    async fn create(&self, user_email: String, text: String) -> StoreResult<Post>;

    /// List posts owned by `user_email`, oldest first
    async fn list_by_owner(&self, user_email: &str) -> StoreResult<Vec<Post>>;

    /// Delete post by id
    async fn delete(&self, id: &str) -> StoreResult<()>;
}

#[async_trait]
impl PostRepository for JsonStore {
    async fn create(&self, user_email: String, text: String) -> StoreResult<Post> {
        self.create_post(user_email, text).await
    }

    async fn list_by_owner(&self, user_email: &str) -> StoreResult<Vec<Post>> {
        self.get_posts(user_email).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.delete_post(id).await
    }
}
