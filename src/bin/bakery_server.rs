// ABOUTME: Bakery production server binary
// ABOUTME: Loads configuration, initializes logging, and serves the production API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Bakery Production Server Binary
//!
//! Serves the what-can-I-make and recipe cost endpoints over a tenant-scoped
//! `SQLite` inventory store.

use anyhow::Result;
use bakery_inventory::{config::environment::ServerConfig, logging, server};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "bakery-server")]
#[command(about = "Bakery production API - recipe feasibility and cost analysis")]
struct Args {
    /// Override `HTTP_PORT`
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    config.validate()?;

    logging::init_from_config(&config)?;
    info!("{}", config.summary());

    let resources = server::bootstrap(config).await?;

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
