//! JSON document store.
//!
//! `JsonStore` owns one file holding a [`Document`]. Every operation loads
//! the whole document from disk, works on that copy and (for mutations)
//! writes the whole document back. Nothing is cached between calls.
//!
//! Mutations hold the write half of a shared `RwLock` for the full
//! read-modify-write span; lookups hold the read half. Clones of a store
//! share the same lock.

mod error;
mod file;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::RwLock;

pub use error::{StoreError, StoreResult};

use crate::domain::{Document, Post, User};

/// Handle to a JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonStore {
    path: PathBuf,
    lock: Arc<RwLock<()>>,
}

impl JsonStore {
    /// Create a store for the document at `path`. Touches nothing on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(RwLock::new(())),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the document with empty collections unless a readable file is
    /// already present. Existing content is left as is.
    pub async fn ensure_database(&self) -> StoreResult<()> {
        let _guard = self.lock.write().await;

        match file::remove_stale_temps(&self.path).await {
            Ok(0) => {}
            Ok(removed) => {
                tracing::info!(path = %self.path.display(), removed, "removed stale temporary files")
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not clean temporary files")
            }
        }

        if fs::read(&self.path).await.is_ok() {
            tracing::debug!(path = %self.path.display(), "database already present");
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::write(&self.path, e))?;
        }

        file::write_document(&self.path, &Document::default()).await?;
        tracing::info!(path = %self.path.display(), "database created");
        Ok(())
    }

    /// Load the document, failing if it is missing or malformed.
    pub async fn check(&self) -> StoreResult<()> {
        let _guard = self.lock.read().await;
        self.read_document().await.map(|_| ())
    }

    /// Insert a user, replacing any existing entry with the same email.
    pub async fn create_user(
        &self,
        email: String,
        password: String,
        name: String,
        age: i64,
    ) -> StoreResult<User> {
        let _guard = self.lock.write().await;
        let mut doc = self.read_document().await?;

        let user = User::new(email, password, name, age);
        if doc.users.insert(user.email.clone(), user.clone()).is_some() {
            tracing::debug!(email = %user.email, "overwriting existing user");
        }

        self.write_document(&doc).await?;
        Ok(user)
    }

    /// Replace an existing user's password, name and age.
    ///
    /// The email and creation time are kept. Fails with
    /// [`StoreError::UserNotFound`] without writing if the email is unknown.
    pub async fn update_user(
        &self,
        email: String,
        password: String,
        name: String,
        age: i64,
    ) -> StoreResult<User> {
        let _guard = self.lock.write().await;
        let mut doc = self.read_document().await?;

        let user = doc
            .users
            .get(&email)
            .map(|existing| existing.replaced_with(password, name, age))
            .ok_or(StoreError::UserNotFound(email))?;
        doc.users.insert(user.email.clone(), user.clone());

        self.write_document(&doc).await?;
        Ok(user)
    }

    /// Look up a user by email.
    ///
    /// An unreadable document is reported as [`StoreError::UserNotFound`]
    /// after logging the underlying failure.
    pub async fn get_user(&self, email: &str) -> StoreResult<User> {
        let _guard = self.lock.read().await;

        let doc = match self.read_document().await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, email, "user lookup could not load database");
                return Err(StoreError::UserNotFound(email.to_string()));
            }
        };

        doc.users
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(email.to_string()))
    }

    /// Remove a user. Removing an unknown email succeeds and writes nothing.
    ///
    /// Posts owned by the user are kept and keep referencing the email.
    pub async fn delete_user(&self, email: &str) -> StoreResult<()> {
        let _guard = self.lock.write().await;
        let mut doc = self.read_document().await?;

        if doc.users.remove(email).is_none() {
            tracing::debug!(email, "user already absent");
            return Ok(());
        }

        self.write_document(&doc).await
    }

    /// Add a post for an existing user under a newly generated id.
    pub async fn create_post(&self, user_email: String, text: String) -> StoreResult<Post> {
        let _guard = self.lock.write().await;
        let mut doc = self
            .read_document()
            .await
            .map_err(StoreError::unavailable)?;

        if !doc.has_user(&user_email) {
            return Err(StoreError::UserNotFound(user_email));
        }

        let post = Post::new(user_email, text);
        doc.posts.insert(post.id.clone(), post.clone());

        self.write_document(&doc).await?;
        Ok(post)
    }

    /// All posts owned by `user_email`, oldest first. Empty if none match.
    pub async fn get_posts(&self, user_email: &str) -> StoreResult<Vec<Post>> {
        let _guard = self.lock.read().await;
        let doc = self.read_document().await?;
        Ok(doc.posts_by_owner(user_email))
    }

    /// Remove a post by id, failing with [`StoreError::PostNotFound`] if absent.
    pub async fn delete_post(&self, id: &str) -> StoreResult<()> {
        let _guard = self.lock.write().await;
        let mut doc = self.read_document().await?;

        if doc.posts.remove(id).is_none() {
            return Err(StoreError::PostNotFound(id.to_string()));
        }

        self.write_document(&doc).await
    }

    // Callers must hold the lock.
    async fn read_document(&self) -> StoreResult<Document> {
        file::read_document(&self.path).await
    }

    async fn write_document(&self, doc: &Document) -> StoreResult<()> {
        file::write_document(&self.path, doc).await
    }
}
