//! Infrastructure layer - External systems integration
//!
//! The only external system is the filesystem: a single JSON document
//! managed by [`JsonStore`], exposed to services through repository traits.

pub mod repositories;
pub mod store;

pub use repositories::{PostRepository, UserRepository};
pub use store::{JsonStore, StoreError, StoreResult};
