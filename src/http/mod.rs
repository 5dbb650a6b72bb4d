//! HTTP dispatcher
//!
//! Routes the six record operations, wraps them with CORS-header injection
//! and request logging, and serves the static site under `/static/`.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use response::{Empty, ErrorBody};
pub use server::{AppState, HttpServer};
