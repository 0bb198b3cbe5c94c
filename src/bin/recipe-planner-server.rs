// ABOUTME: Server binary for the recipe discovery and meal-planning API
// ABOUTME: Loads configuration and the catalog, opens durable storage, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

//! # Recipe Planner API Server Binary
//!
//! Starts the HTTP API the browser client talks to. Configuration comes from
//! the environment; a couple of flags override it for local runs.

use anyhow::Result;
use clap::Parser;
use recipe_planner::{
    catalog::Catalog,
    config::{ServerConfig, StorageLocation},
    logging,
    resources::ServerResources,
    server, storage,
    store::RecipeStore,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-planner-server")]
#[command(about = "Recipe discovery and meal-planning API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the storage directory (`:memory:` keeps state in memory)
    #[arg(long)]
    storage_dir: Option<String>,

    /// Override the remote catalog URL
    #[arg(long)]
    catalog_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(dir) = args.storage_dir.as_deref() {
        config.storage = StorageLocation::parse(dir);
    }
    if let Some(url) = args.catalog_url {
        config.catalog.url = Some(url);
    }

    logging::init_from_env()?;
    config.validate()?;

    info!("Starting recipe planner API");
    info!("{}", config.summary());

    let store = storage::open(&config.storage)?;
    info!(storage.backend = store.backend_name(), storage.location = %config.storage, "Storage opened");

    let catalog = Catalog::load(&config.catalog).await;
    let resources = ServerResources::new(RecipeStore::new(catalog, store), config).into_shared();

    if let Err(e) = server::run(resources).await {
        error!(error = %e, "Server stopped with an error");
        return Err(e.into());
    }
    Ok(())
}
