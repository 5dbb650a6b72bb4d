//! Observability subsystem
//!
//! Structured logging as one-line JSON events:
//! - deterministic key ordering
//! - explicit severity levels
//! - synchronous, no buffering
//!
//! # Usage
//!
//! ```ignore
//! use inkwell::observability::Event;
//!
//! Event::info("http.request")
//!     .field("method", "GET")
//!     .field("path", "/records")
//!     .emit();
//! ```

pub mod logger;

pub use logger::{Event, Severity};
