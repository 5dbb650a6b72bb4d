//! CLI-specific error types
//!
//! Everything here is fatal: print to stderr and exit non-zero.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Store connection failed at boot
    #[error("store boot failed: {0}")]
    Boot(#[from] StoreError),

    /// Runtime or listener failure
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
