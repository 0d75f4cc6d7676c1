//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `init` - Create the database file

pub mod args;

pub use args::{Cli, Commands};
