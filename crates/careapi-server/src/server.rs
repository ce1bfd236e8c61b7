use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::task::JoinHandle;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use careapi_db_memory::InMemoryStorage;
use careapi_graphql::{CareSchemaBuilder, GraphQLState, graphql_handler};
use careapi_storage::DynStorage;

use crate::{config::AppConfig, handlers, middleware as app_middleware};

/// Assembles the router: health endpoints, the GraphQL endpoint, and the
/// middleware stack. Schema construction happens here, so a broken operation
/// table aborts startup instead of failing requests.
pub fn build_app(cfg: &AppConfig, storage: DynStorage) -> anyhow::Result<Router> {
    let schema = CareSchemaBuilder::new(cfg.graphql.to_schema_builder_config()).build()?;
    let state = GraphQLState { schema, storage };

    let body_limit = cfg.server.body_limit_bytes;
    Ok(Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        // The GraphQL endpoint
        .route("/graphql", post(graphql_handler))
        .with_state(state)
        // Middleware stack (order: request id -> cors/compression/trace -> body limit)
        .layer(middleware::from_fn(app_middleware::request_id))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(
            |req: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http.request",
                    http.method = %req.method(),
                    http.target = %req.uri()
                )
            },
        ))
        .layer(axum::extract::DefaultBodyLimit::max(body_limit)))
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
    storage: Option<DynStorage>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
            storage: None,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    /// Injects a storage backend. The in-memory backend is used when none is
    /// supplied.
    pub fn with_storage(mut self, storage: DynStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn build(self) -> anyhow::Result<CareApiServer> {
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(InMemoryStorage::new()));
        let app = build_app(&self.config, storage)?;

        Ok(CareApiServer {
            addr: self.addr,
            app,
        })
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CareApiServer {
    addr: SocketAddr,
    app: Router,
}

impl CareApiServer {
    /// Serves until Ctrl+C, then drains in-flight requests before returning.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Binds the listener and serves in a background task, returning a handle
    /// for deterministic teardown. Port 0 binds an ephemeral port, available
    /// through [`ServerHandle::local_addr`].
    pub async fn bind(self) -> anyhow::Result<ServerHandle> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        let addr = listener.local_addr()?;
        let (shutdown, rx) = tokio::sync::oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, self.app)
                .with_graceful_shutdown(async move {
                    let _ = rx.await;
                })
                .await;
        });

        tracing::info!("listening on {addr}");
        Ok(ServerHandle {
            addr,
            shutdown,
            task,
        })
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

/// A running server instance started with [`CareApiServer::bind`].
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: tokio::sync::oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// The address the server is actually listening on.
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting new connections, drains in-flight requests, then
    /// releases the listening port.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        let _ = self.shutdown.send(());
        self.task.await?;
        Ok(())
    }
}
