//! CLI module
//!
//! main.rs delegates here: parse flags, load configuration, boot the
//! configured store backend, and serve until the listener fails.

pub mod args;
pub mod errors;

pub use args::Cli;
pub use errors::{CliError, CliResult};

use std::sync::Arc;

use crate::config::{ServerConfig, StoreBackend};
use crate::http::HttpServer;
use crate::store::{MemoryStore, MongoStore, RecordStore};

/// Parse arguments, boot the store, and serve
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(directory) = &cli.directory {
        config.static_dir = directory.display().to_string();
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(config))
}

async fn serve(config: ServerConfig) -> CliResult<()> {
    let store: Arc<dyn RecordStore> = match config.store.backend {
        StoreBackend::Mongodb => Arc::new(MongoStore::connect(&config.store).await?),
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    HttpServer::new(config, store).start().await?;
    Ok(())
}
