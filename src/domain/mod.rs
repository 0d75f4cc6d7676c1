//! Domain layer - Core business entities
//!
//! Users, posts and the document that persists both. These types carry the
//! exact on-disk field names; nothing here touches the filesystem.

pub mod document;
pub mod post;
pub mod user;

pub use document::Document;
pub use post::Post;
pub use user::{User, UserResponse};
