// 🌐 REST API with Axum
// Routes, shared state and handlers for the pipeline editor backend stub.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::catalog::{NodeCatalog, NodeType};
use crate::config::ServerConfig;
use crate::cors::create_cors_layer;
use crate::telemetry::TRACING_TARGET_API;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<NodeCatalog>,

    /// Simulated backend latency applied before answering
    pub latency: Duration,
}

impl AppState {
    pub fn new(catalog: NodeCatalog, latency: Duration) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            latency,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(NodeCatalog::new(), config.latency())
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/nodes - Available node types for the pipeline editor
async fn list_node_types(State(state): State<AppState>) -> Json<Vec<NodeType>> {
    // Only this request is parked; the runtime keeps serving others.
    tokio::time::sleep(state.latency).await;

    tracing::debug!(
        target: TRACING_TARGET_API,
        count = state.catalog.len(),
        latency = ?state.latency,
        "Serving node types"
    );

    Json(state.catalog.all().to_vec())
}

// ============================================================================
// Router
// ============================================================================

/// Builds the full application: API routes, request tracing, CORS.
///
/// CORS is the outermost layer so that preflights and the framework's
/// 404/405 fallbacks carry the cross-origin headers too.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/nodes", get(list_node_types))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
}

// ============================================================================
// TESTS
// ============================================================================
