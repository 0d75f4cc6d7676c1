//! HTTP request handlers.

pub mod post_handler;
pub mod user_handler;

pub use post_handler::post_routes;
pub use user_handler::user_routes;
