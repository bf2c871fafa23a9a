// SPDX-License-Identifier: MIT OR Apache-2.0

//! tengen - Go board server
//!
//! Serves a single shared board over HTTP together with the static
//! browser client, and answers advisor move requests for White.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tengen_core::{GameHandle, DEFAULT_BOARD_SIZE};
use tengen_server::{load_config, routes, HealthManager};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Directory with the browser client (overrides the config file)
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, source) = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(dir) = args.static_dir {
        config.static_dir = dir;
    }

    // Initialize logging
    let filter = if args.debug {
        EnvFilter::new("debug,hyper=info,warp=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Loaded configuration from {}", source);

    let game = GameHandle::new(i64::from(DEFAULT_BOARD_SIZE));
    let health = Arc::new(HealthManager::new(game.clone()));
    let routes = routes(game, health, config.static_dir.clone());

    info!("Serving static files from {}", config.static_dir.display());

    let (addr, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(config.bind_addr, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!("Server starting on {}...", addr);
    server.await;
    info!("Server stopped");

    Ok(())
}
