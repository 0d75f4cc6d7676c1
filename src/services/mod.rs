//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate the repositories to fulfill application use cases
//! and translate storage failures into [`AppError`](crate::errors::AppError).
//! They depend on repository traits for dependency inversion.

pub mod container;
mod post_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use post_service::{PostManager, PostService};
pub use user_service::{UserManager, UserService};
