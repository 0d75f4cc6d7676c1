//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user, replacing any existing user with the same email
    async fn create_user(&self, email: String, password: String, name: String, age: i64)
        -> AppResult<User>;

    /// Update an existing user's password, name and age
    async fn update_user(&self, email: String, password: String, name: String, age: i64)
        -> AppResult<User>;

    /// Get user by email
    async fn get_user(&self, email: &str) -> AppResult<User>;

    /// Delete user by email; deleting an unknown user succeeds
    async fn delete_user(&self, email: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService using a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(
        &self,
        email: String,
        password: String,
        name: String,
        age: i64,
    ) -> AppResult<User> {
        let user = self.repo.create(email, password, name, age).await?;
        tracing::info!(email = %user.email, "user created");
        Ok(user)
    }

    async fn update_user(
        &self,
        email: String,
        password: String,
        name: String,
        age: i64,
    ) -> AppResult<User> {
        let user = self.repo.update(email, password, name, age).await?;
        tracing::info!(email = %user.email, "user updated");
        Ok(user)
    }

    async fn get_user(&self, email: &str) -> AppResult<User> {
        Ok(self.repo.find_by_email(email).await?)
    }

    async fn delete_user(&self, email: &str) -> AppResult<()> {
        self.repo.delete(email).await?;
        tracing::info!(email, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::repositories::MockUserRepository;
    use crate::infra::StoreError;

    fn create_test_user(email: &str) -> User {
        User::new(email.to_string(), "pw".to_string(), "Test User".to_string(), 30)
    }

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "test@example.com")
            .returning(|email| Ok(create_test_user(email)));

        let user = service(repo).get_user("test@example.com").await.unwrap();
        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Err(StoreError::UserNotFound(email.to_string())));

        let result = service(repo).get_user("missing@example.com").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_user_passes_fields_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|email, password, name, age| {
                email == "a@x.com" && password == "pw" && name == "Ann" && *age == 30
            })
            .times(1)
            .returning(|email, password, name, age| Ok(User::new(email, password, name, age)));

        let user = service(repo)
            .create_user("a@x.com".into(), "pw".into(), "Ann".into(), 30)
            .await
            .unwrap();
        assert_eq!(user.name, "Ann");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .returning(|email, _, _, _| Err(StoreError::UserNotFound(email)));

        let result = service(repo)
            .update_user("ghost@x.com".into(), "pw".into(), "G".into(), 1)
            .await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(()));

        assert!(service(repo).delete_user("a@x.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_failure_is_not_masked() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| {
            Err(StoreError::Write {
                path: "db.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "ro"),
            })
        });

        let result = service(repo).delete_user("a@x.com").await;
        assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
    }
}
