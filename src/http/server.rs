//! HTTP server assembly
//!
//! Builds the axum router: the six record routes behind the CORS wrapper,
//! the `/` redirect, the static file service, and the request log around
//! everything.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::observability::Event;
use crate::store::{RecordStore, TenantRouter};

use super::handlers;
use super::middleware;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub tenants: Arc<TenantRouter>,
}

pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: ServerConfig, store: Arc<dyn RecordStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn build_router(config: &ServerConfig, store: Arc<dyn RecordStore>) -> Router {
        let state = AppState {
            store,
            tenants: Arc::new(TenantRouter::new(config.tenants.clone())),
        };

        let records = Router::new()
            .route(
                "/records",
                get(handlers::list)
                    .post(handlers::create)
                    .options(handlers::preflight),
            )
            .route(
                "/records/:id",
                get(handlers::get)
                    .post(handlers::update)
                    .delete(handlers::remove)
                    .options(handlers::preflight),
            )
            .layer(from_fn(middleware::cors))
            .with_state(state);

        Router::new()
            .route("/", get(handlers::root_redirect))
            .nest_service("/static", ServeDir::new(&config.static_dir))
            .merge(records)
            .layer(from_fn(middleware::log_request))
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until it fails
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Event::info("http.listen")
            .field("addr", addr)
            .field("static_dir", &self.config.static_dir)
            .emit();

        let listener = TcpListener::bind(addr).await?;
        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}
