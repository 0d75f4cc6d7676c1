//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::JsonStore;
use crate::services::{PostService, ServiceContainer, Services, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Post service
    pub post_service: Arc<dyn PostService>,
    /// Store handle, used for health checks
    pub store: JsonStore,
}

impl AppState {
    /// Build the state with both services running on `store`.
    pub fn from_store(store: JsonStore) -> Self {
        let services = Services::from_store(store.clone());

        Self {
            user_service: services.users(),
            post_service: services.posts(),
            store,
        }
    }
}
