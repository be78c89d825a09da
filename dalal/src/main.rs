//! dalal - mock NSE market-data service

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dalal::ServiceConfig;
use dalal_core::ResolutionMode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Mock NSE market-data service.
#[derive(Debug, Parser)]
#[command(name = "dalal", version, about)]
struct Cli {
    /// TOML configuration file. `DALAL_*` environment variables override it.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind.
    #[arg(short, long)]
    port: Option<u16>,

    /// Serve a prebuilt frontend from this directory.
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Seed the RNG for reproducible responses.
    #[arg(long)]
    seed: Option<u64>,

    /// Reject unknown timeframes and symbols instead of substituting defaults.
    #[arg(long)]
    strict: bool,

    /// Print available routes and exit.
    #[arg(long)]
    routes: bool,
}

impl Cli {
    fn apply(self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = Some(dir);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.strict {
            config.resolution = ResolutionMode::Strict;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dalal=info,dalal_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.routes {
        dalal::print_routes();
        return Ok(());
    }

    let config = ServiceConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load configuration from {}", path.display()),
        None => "failed to load configuration from the environment".to_string(),
    })?;
    if let Some(path) = &cli.config {
        info!("Loaded configuration from: {}", path.display());
    }
    let config = cli.apply(config);

    info!("Starting dalal v{}", env!("CARGO_PKG_VERSION"));
    dalal::serve(config).await
}
