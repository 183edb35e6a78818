//! catfact-relay: application entry point.
//!
//! Initializes tracing, loads configuration from an optional TOML file plus the
//! `PORT` environment variable, builds the upstream client, sets up the Axum
//! router and starts the HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catfact_relay::config::{
    AppConfig, LoggingConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, PORT_ENV_VAR,
};
use catfact_relay::{create_router, http::start_server, AppState, CatFactClient};

/// catfact-relay: serves cat facts wrapped in an identity envelope
#[derive(Parser, Debug)]
#[command(name = "catfact-relay", version, about)]
struct Args {
    /// Path to configuration file (optional when using the default path)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "catfact_relay=debug,reqwest=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listening port, overrides both the config file and PORT
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration: CLI port > PORT env > file > defaults
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };
    config.apply_port_override(std::env::var(PORT_ENV_VAR).ok().as_deref())?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::info!(
        config = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH),
        "Loaded configuration"
    );

    let client = CatFactClient::new(&config.upstream)?;
    tracing::info!(
        url = %client.url(),
        timeout_ms = config.upstream.timeout_ms,
        "Upstream fact API configured"
    );

    let state = AppState::new(config.clone(), Arc::new(client));
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
