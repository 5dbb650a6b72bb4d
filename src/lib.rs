//! inkwell - a multi-site blog record service
//!
//! CRUD operations on flat blog records over HTTP, with each request's
//! `Host` header routed to a per-site collection in a document store.

pub mod cli;
pub mod config;
pub mod http;
pub mod observability;
pub mod store;
