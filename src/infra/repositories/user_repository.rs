//! User repository backed by the JSON document store.

use async_trait::async_trait;

use crate::domain::User;
use crate::infra::store::{JsonStore, StoreResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Users are identified by email; the email is the document key.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or overwrite the user stored under `email`
    async fn create(&self, email: String, password: String, name: String, age: i64)
        -> StoreResult<User>;

    /// Replace an existing user's fields
    async fn update(&self, email: String, password: String, name: String, age: i64)
        -> StoreResult<User>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> StoreResult<User>;

    /// Remove user by email (absent is not an error)
    async fn delete(&self, email: &str) -> StoreResult<()>;
}

#[async_trait]
impl UserRepository for JsonStore {
    async fn create(
        &self,
        email: String,
        password: String,
        name: String,
        age: i64,
    ) -> StoreResult<User> {
        self.create_user(email, password, name, age).await
    }

    async fn update(
        &self,
        email: String,
        password: String,
        name: String,
        age: i64,
    ) -> StoreResult<User> {
        self.update_user(email, password, name, age).await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<User> {
        self.get_user(email).await
    }

    async fn delete(&self, email: &str) -> StoreResult<()> {
        self.delete_user(email).await
    }
}
