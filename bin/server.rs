// Pipeline Mock API - Web Server
// Serves the node-type catalog the pipeline editor loads at startup.

use anyhow::{Context, Result};
use clap::Parser;
use pipeline_mock_api::{init_tracing, run, ServerConfig, VERSION};

#[derive(Parser)]
#[command(name = "mock-api", version, about = "AI Pipeline Editor mock API", long_about = None)]
struct Cli {
    #[command(flatten)]
    server: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    tracing::info!(version = VERSION, "🌐 AI Pipeline Editor API starting");

    let addr = cli.server.server_addr();
    run(cli.server)
        .await
        .with_context(|| format!("Failed to run server on {}", addr))?;

    Ok(())
}
