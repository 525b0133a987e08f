// src/main.rs

//! The main entry point for the fuod server application.

use anyhow::Result;
use fuod::config::Config;
use fuod::core::handler::StandaloneExecutor;
use fuod::core::library::Library;
use fuod::server;
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{filter::EnvFilter, prelude::*};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    run_app().await
}

async fn run_app() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--version".to_string()) {
        println!("fuod version {VERSION}");
        return Ok(());
    }

    // An explicit --config must exist; the default path is optional.
    let explicit_config = args
        .iter()
        .position(|arg| arg == "--config")
        .map(|i| args.get(i + 1).map(|s| s.as_str()));
    let mut config = match explicit_config {
        Some(None) => {
            eprintln!("--config flag requires a value");
            std::process::exit(1);
        }
        Some(Some(path)) => load_config_or_exit(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config_or_exit(DEFAULT_CONFIG_PATH),
        None => Config::default(),
    };

    // Override port if provided as a command-line argument
    if let Some(port_index) = args.iter().position(|arg| arg == "--port") {
        if let Some(port_str) = args.get(port_index + 1) {
            match port_str.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => {
                    eprintln!("Invalid port number: {port_str}");
                    std::process::exit(1);
                }
            }
        } else {
            eprintln!("--port flag requires a value");
            std::process::exit(1);
        }
    }

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .compact() // Use the compact, single-line format.
                .with_ansi(true),
        )
        .init();

    info!("Starting fuod {VERSION} without a player attached.");
    let library = Arc::new(Library::new());
    let executor = Arc::new(StandaloneExecutor::new());

    if let Err(e) = server::run(config, library, executor).await {
        error!("Server runtime error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Loads the configuration, exiting the process if it is unusable.
fn load_config_or_exit(path: &str) -> Config {
    match Config::from_file(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration from \"{path}\": {e:#}");
            std::process::exit(1);
        }
    }
}
