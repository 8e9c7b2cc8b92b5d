// Pipeline Mock API - Core Library
// Exposes all modules for use in the server binary and tests

pub mod catalog;    // Node types offered by the editor palette
pub mod api;        // Routes, handlers and shared state
pub mod cors;       // Cross-origin policy
pub mod config;     // CLI flags and environment
pub mod server;     // Bind, serve, graceful shutdown
pub mod telemetry;  // Tracing subscriber

// Re-export commonly used types
pub use catalog::{NodeCatalog, NodeType};
pub use api::{build_router, AppState};
pub use cors::create_cors_layer;
pub use config::ServerConfig;
pub use server::{bind, run, serve, shutdown_signal, ServerError};
pub use telemetry::init_tracing;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
