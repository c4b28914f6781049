use anyhow::Result;
use clap::Parser;
use remote_co::{secrets, start_web_server, EnvironmentConfig};
use std::path::PathBuf;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "remoteco")]
#[command(about = "Remote Co. job dashboard API server")]
struct Cli {
    /// Environment config file (local/production sections)
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override the configured listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("remote_co=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();

    // A missing key must surface here, before any fetch is attempted.
    let api_key = secrets::resolve_api_key()?;

    let mut config = EnvironmentConfig::load(&cli.config)?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    info!("Starting Remote Co. dashboard backend");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    info!(
        "Page limit: {}, fetch-all pages: {}",
        config.page_limit, config.max_pages
    );

    start_web_server(config, api_key).await
}
