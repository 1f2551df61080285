//! mmr-rs (Mood Music Recommender) - Recommendation service
//!
//! Serves the front-end page, mood recommendations decorated with quotes,
//! and the favorites list, all backed by one JSON data file.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mmr_common::config::{ConfigFileStatus, ConfigOverrides, ServiceConfig};
use mmr_common::JsonFileStore;
use mmr_rs::services::ZenQuotesClient;
use mmr_rs::{build_router, AppState};
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for mmr-rs
#[derive(Parser, Debug)]
#[command(name = "mmr-rs")]
#[command(about = "Mood Music Recommender service")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(short, long, env = "MMR_BIND")]
    bind: Option<String>,

    /// Directory holding favorites.json
    #[arg(short, long, env = "MMR_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Base URL of the ZenQuotes API
    #[arg(long, env = "MMR_QUOTES_URL")]
    quotes_url: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "MMR_LOG_LEVEL")]
    log_level: Option<String>,

    /// TOML config file (falls back to MMR_CONFIG, then the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            bind_addr: self.bind,
            data_dir: self.data_dir,
            quotes_base_url: self.quotes_url,
            log_level: self.log_level,
            config_file: self.config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be in the environment before clap reads MMR_* variables
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();
    let (config, config_status) = ServiceConfig::load(args.into_overrides());

    init_tracing(&config.log_level);

    info!(
        "Starting Mood Music Recommender (mmr-rs) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match dotenv {
        Ok(path) => info!("Loaded environment file: {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env file: {}", e),
    }
    match &config_status {
        ConfigFileStatus::NotFound => debug!("No config file found, using environment and defaults"),
        ConfigFileStatus::Loaded(path) => info!("Loaded config file: {}", path.display()),
        ConfigFileStatus::Ignored(path, reason) => {
            warn!("Ignoring config file {}: {}", path.display(), reason)
        }
    }

    config
        .ensure_data_dir()
        .context("Failed to initialize data directory")?;
    let data_file = config.data_file();
    info!("Data file: {}", data_file.display());

    let quotes = ZenQuotesClient::new(config.quotes_base_url.clone())
        .context("Failed to create quote client")?;
    info!("Quote provider: {}", quotes.base_url());

    let state = AppState::new(Arc::new(JsonFileStore::new(data_file)), Arc::new(quotes));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;
    info!("mmr-rs listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("mmr-rs stopped");
    Ok(())
}

/// RUST_LOG wins; otherwise `level` applies to this service and its HTTP layer
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "mmr_rs={level},mmr_common={level},tower_http={level}"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
