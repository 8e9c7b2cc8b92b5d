// 📜 Logging setup
// Structured logs via `tracing`; RUST_LOG overrides the default filter.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const TRACING_TARGET_SERVER: &str = "mock_api::server";
pub const TRACING_TARGET_API: &str = "mock_api::api";
pub const TRACING_TARGET_SHUTDOWN: &str = "mock_api::shutdown";

/// Filter used when RUST_LOG is not set
pub const DEFAULT_FILTER: &str = "info,tower_http=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Fails if a subscriber has already been installed.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .try_init()?;

    Ok(())
}
