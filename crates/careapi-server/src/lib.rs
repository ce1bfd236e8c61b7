pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;

pub use config::{AppConfig, LoggingConfig, ServerConfig, StorageConfig};
pub use observability::{init_tracing, shutdown_tracing};
pub use server::{CareApiServer, ServerBuilder, ServerHandle, build_app};
