//! Service Container - Centralized service access.
//!
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{PostManager, PostService, UserManager, UserService};
use crate::infra::JsonStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get post service
    fn posts(&self) -> Arc<dyn PostService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    post_service: Arc<dyn PostService>,
}

impl Services {
    /// Wire both services onto one shared store
    pub fn from_store(store: JsonStore) -> Self {
        let store = Arc::new(store);
        let user_service = Arc::new(UserManager::new(store.clone()));
        let post_service = Arc::new(PostManager::new(store));

        Self {
            user_service,
            post_service,
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn posts(&self) -> Arc<dyn PostService> {
        self.post_service.clone()
    }
}
