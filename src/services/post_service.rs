//! Post service - Handles post-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Post;
use crate::errors::AppResult;
use crate::infra::PostRepository;

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a post for an existing user
    async fn create_post(&self, user_email: String, text: String) -> AppResult<Post>;

    /// List a user's posts, oldest first
    async fn list_posts(&self, user_email: &str) -> AppResult<Vec<Post>>;

    /// Delete a post by id
    async fn delete_post(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of PostService using a repository.
pub struct PostManager {
    repo: Arc<dyn PostRepository>,
}

impl PostManager {
    /// Create new post service instance with repository
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn create_post(&self, user_email: String, text: String) -> AppResult<Post> {
        let post = self.repo.create(user_email, text).await?;
        tracing::info!(id = %post.id, owner = %post.user_email, "post created");
        Ok(post)
    }

    async fn list_posts(&self, user_email: &str) -> AppResult<Vec<Post>> {
        let posts = self.repo.list_by_owner(user_email).await?;
        tracing::debug!(owner = user_email, count = posts.len(), "posts listed");
        Ok(posts)
    }

    async fn delete_post(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(id, "post deleted");
        Ok(())
    }
}
