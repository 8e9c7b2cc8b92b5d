// ⚙️ Server Configuration
// Flags and environment variables for the mock API process.
// Defaults reproduce the stock behaviour: 0.0.0.0:8000 with a one second delay.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Args;

use crate::server::ServerError;

/// Default simulated backend latency
pub const DEFAULT_LATENCY_MS: u64 = 1000;

/// Upper bound for the simulated latency
pub const MAX_LATENCY_MS: u64 = 60_000;

/// HTTP server configuration.
///
/// Every option can also be set through the environment:
/// - `MOCK_API_HOST` - listen address (default: 0.0.0.0)
/// - `MOCK_API_PORT` - listen port (default: 8000)
/// - `MOCK_API_LATENCY_MS` - artificial delay per request (default: 1000)
/// - `MOCK_API_SHUTDOWN_TIMEOUT` - graceful shutdown budget in seconds (default: 30)
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Host address to bind the server to.
    #[arg(long, env = "MOCK_API_HOST", default_value_t = default_host())]
    pub host: IpAddr,

    /// TCP port number for the server to listen on. 0 picks a free port.
    #[arg(short = 'p', long, env = "MOCK_API_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Simulated latency applied to every `/api/nodes` request, in milliseconds.
    #[arg(long, env = "MOCK_API_LATENCY_MS", default_value_t = DEFAULT_LATENCY_MS)]
    pub latency_ms: u64,

    /// Seconds in-flight requests get to finish after a shutdown signal.
    #[arg(long, env = "MOCK_API_SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 8000,
            latency_ms: DEFAULT_LATENCY_MS,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    /// Rejects values the server cannot sensibly run with.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ServerError::Config(format!(
                "latency {}ms exceeds the maximum of {}ms",
                self.latency_ms, MAX_LATENCY_MS
            )));
        }

        if self.shutdown_timeout == 0 {
            return Err(ServerError::Config(
                "shutdown timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    pub fn binds_to_all_interfaces(&self) -> bool {
        self.host.is_unspecified()
    }
}

// ============================================================================
// TESTS
// ============================================================================
