// 🚀 Server lifecycle
// Bind the listener, serve the router, stop on SIGINT/SIGTERM.

use std::future::{Future, IntoFuture};
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;

use crate::api::{build_router, AppState};
use crate::config::ServerConfig;
use crate::telemetry::{TRACING_TARGET_SERVER, TRACING_TARGET_SHUTDOWN};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// Binds the TCP listener described by `config`.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    let server_addr = config.server_addr();

    match TcpListener::bind(server_addr).await {
        Ok(listener) => {
            tracing::info!(
                target: TRACING_TARGET_SERVER,
                addr = %listener.local_addr().unwrap_or(server_addr),
                binds_to_all_interfaces = config.binds_to_all_interfaces(),
                "Successfully bound to address"
            );
            Ok(listener)
        }
        Err(e) => {
            tracing::error!(
                target: TRACING_TARGET_SERVER,
                addr = %server_addr,
                error = %e,
                "Failed to bind to address"
            );
            Err(ServerError::Bind {
                address: server_addr.to_string(),
                source: e,
            })
        }
    }
}

/// Serves the application on an already bound listener until `shutdown` resolves.
///
/// In-flight requests get `shutdown_timeout` to finish once `shutdown` has
/// resolved; after that the serve loop is abandoned.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
    shutdown_timeout: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let signal = async move {
        shutdown.await;
        let _ = signalled_tx.send(());
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();
    tokio::pin!(server);

    let drain_deadline = async move {
        match signalled_rx.await {
            Ok(()) => tokio::time::sleep(shutdown_timeout).await,
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = &mut server => {
            result?;
            tracing::info!(target: TRACING_TARGET_SERVER, "Server stopped");
        }
        () = drain_deadline => {
            tracing::warn!(
                target: TRACING_TARGET_SHUTDOWN,
                timeout_secs = shutdown_timeout.as_secs(),
                "Shutdown timeout elapsed, abandoning in-flight requests"
            );
        }
    }

    Ok(())
}

/// Validates the config, binds and serves until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<()> {
    config.validate()?;

    tracing::info!(
        target: TRACING_TARGET_SERVER,
        host = %config.host,
        port = config.port,
        latency_ms = config.latency_ms,
        shutdown_timeout_sec = config.shutdown_timeout,
        "Server configuration loaded"
    );

    let listener = bind(&config).await?;
    let state = AppState::from_config(&config);

    serve(listener, state, shutdown_signal(), config.shutdown_timeout()).await
}

/// Waits for SIGTERM or SIGINT (Ctrl+C).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %e,
                "Failed to install Ctrl+C handler"
            );
            std::future::pending::<()>().await;
        } else {
            tracing::info!(
                target: TRACING_TARGET_SHUTDOWN,
                "Received Ctrl+C signal, initiating graceful shutdown"
            );
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!(
                    target: TRACING_TARGET_SHUTDOWN,
                    "Received SIGTERM signal, initiating graceful shutdown"
                );
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %e,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Graceful shutdown initiated");
}

// ============================================================================
// TESTS
// ============================================================================
