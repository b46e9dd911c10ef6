//! hotels: the hotel listing service.
//!
//! This is the application entry point. It loads configuration from TOML,
//! initializes tracing, sets up the Axum router and starts the HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotels::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use hotels::http::start_server;
use hotels::{create_router, AppError};

/// hotels: serves the hotel listing over HTTP
#[derive(Parser, Debug)]
#[command(name = "hotels", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml if present]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "hotels=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override http.host from the configuration file
    #[arg(long)]
    host: Option<String>,

    /// Override http.port from the configuration file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // An explicit path must load; the default path is optional
    let (mut config, source) = match &args.config {
        Some(path) => (AppConfig::load(path)?, Some(path.as_str())),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            (AppConfig::load(DEFAULT_CONFIG_PATH)?, Some(DEFAULT_CONFIG_PATH))
        }
        None => (AppConfig::default(), None),
    };

    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.logging.format)?;

    match source {
        Some(path) => tracing::info!(path, "Loaded configuration"),
        None => tracing::info!("No configuration file found, using defaults"),
    }

    let app = create_router();
    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(filter: &str, format: LogFormat) -> Result<(), AppError> {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    let result = match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}
