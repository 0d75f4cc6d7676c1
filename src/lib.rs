//! postdb - users and posts persisted as one JSON document
//!
//! The core is [`infra::JsonStore`], which keeps every user and post in a
//! single JSON file and performs a full read-modify-write cycle for each
//! mutation. The HTTP API and the `init` command are thin wrappers over it.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, posts and the persisted document
//! - **infra**: The JSON store and repository traits
//! - **services**: Application use cases
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create db.json if it does not exist
//! cargo run -- init
//!
//! # Start the server on another database file
//! cargo run -- --database data/db.json serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Document, Post, User, UserResponse};
pub use errors::{AppError, AppResult};
pub use infra::{JsonStore, StoreError, StoreResult};
