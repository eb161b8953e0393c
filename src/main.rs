use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nvb_mcp::{start_stdio_server, Config};

/// MCP server exposing the Nationale Vacaturebank job-listing API as
/// callable tools over stdio.
#[derive(Parser, Debug)]
#[command(name = "nvb-mcp-server", version, about)]
struct Cli {
    /// Upstream API base URL (overrides NVB_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Upstream request timeout in seconds (overrides NVB_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level filter (overrides LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout = std::time::Duration::from_secs(secs);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // stdout carries the MCP transport; all logging goes to stderr
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    start_stdio_server(&config).await
}
