//! Repository layer - Data access abstraction
//!
//! Services depend on these traits rather than on the concrete store, so
//! they can be exercised against mocks.

mod post_repository;
mod user_repository;

pub use post_repository::PostRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
