//! Server configuration
//!
//! Configuration for the HTTP server and the record store. Loadable from a
//! JSON file with per-field defaults; CLI flags override the file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the config shape
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 80)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of web files served under `/static/` (default: "web/")
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Record store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// Hostname -> collection overrides for tenant routing (default: empty)
    #[serde(default)]
    pub tenants: HashMap<String, String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    80
}

fn default_static_dir() -> String {
    "web/".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            store: StoreConfig::default(),
            tenants: HashMap::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Create a config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which store implementation backs the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// MongoDB server at `uri`
    #[default]
    Mongodb,
    /// Process-local store, for development and tests
    Memory,
}

/// Record store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store backend (default: "mongodb")
    #[serde(default)]
    pub backend: StoreBackend,

    /// Connection string (default: "mongodb://localhost:27017")
    #[serde(default = "default_store_uri")]
    pub uri: String,

    /// Logical database holding the per-site collections (default: "inkwell")
    #[serde(default = "default_store_database")]
    pub database: String,
}

fn default_store_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_store_database() -> String {
    "inkwell".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            uri: default_store_uri(),
            database: default_store_database(),
        }
    }
}
