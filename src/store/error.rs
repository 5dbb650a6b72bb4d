//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store server could not be reached
    #[error("store connection failed: {0}")]
    Connection(String),

    /// A query against the store failed
    #[error("store query failed: {0}")]
    Query(String),

    /// Identifier is not a valid 24-character hex string
    #[error("invalid record identifier: {0}")]
    InvalidId(String),

    /// Record could not be marshaled to or from the store document form
    #[error("record encoding failed: {0}")]
    Encode(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Query(e.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        StoreError::Encode(e.to_string())
    }
}

impl From<mongodb::bson::de::Error> for StoreError {
    fn from(e: mongodb::bson::de::Error) -> Self {
        StoreError::Encode(e.to_string())
    }
}
