//! Envdash Server
//!
//! Run with: cargo run -- --debug
//!
//! # Configuration
//!
//! Settings are read from a TOML file (`--config`, or the first of
//! `~/.config/envdash/config.toml`, `/etc/envdash/config.toml`,
//! `./config.toml`), then environment variables, then flags.
//!
//! Environment variables:
//! - `ENVDASH_HOST`: Host to bind to (default: 127.0.0.1)
//! - `ENVDASH_PORT`: Port to listen on (default: 8050)
//! - `ENVDASH_DEBUG`: Developer mode (default: false)
//! - `ENVDASH_LOG_LEVEL`, `ENVDASH_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full log filter, overrides the above

use clap::Parser;
use envdash::api::{serve, AppState};
use envdash::config::{generate_default_config, Config, LoadedConfig, ServerConfig};
use envdash::dataset::Dataset;
use envdash::logging;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "envdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard of environmental statistics")]
struct Cli {
    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Developer mode: debug logging, pages reload when the server restarts
    #[arg(long)]
    debug: bool,

    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Flags take precedence over file and environment
    fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = port;
        }
        if self.debug {
            server.debug = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // An explicitly named config file must load
    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };

    let mut config = loaded.config;
    cli.apply(&mut config.server);

    logging::init(&config.logging, config.server.debug);

    tracing::info!("Starting Envdash v{}", env!("CARGO_PKG_VERSION"));

    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    for error in &loaded.skipped {
        tracing::warn!("Skipped config file: {}", error);
    }
    if config.server.debug {
        tracing::info!("Developer mode enabled: open pages reload when the server restarts");
    }

    let dataset = match Dataset::environmental() {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            tracing::error!(error = %e, "Dataset is malformed, aborting startup");
            return Err(e.into());
        }
    };
    tracing::info!(
        columns = dataset.columns().len(),
        rows = dataset.row_count(),
        "Dataset loaded"
    );

    let state = AppState::new(dataset, config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Envdash stopped");
    Ok(())
}
