// ABOUTME: Recipe CLI - offline command-line access to the catalog, favorites, and meal plans
// ABOUTME: Works directly on the same durable storage the API server uses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors
//!
//! Usage:
//! ```bash
//! # Search the catalog
//! recipe-cli search chicken --max-cook-time 30
//!
//! # Manage favorites
//! recipe-cli favorites add 2
//! recipe-cli favorites list
//!
//! # Build a meal plan
//! recipe-cli plans create "Week A"
//! recipe-cli plans add Tuesday Lunch 5
//! recipe-cli plans show
//!
//! # Random picks
//! recipe-cli recommend --count 3
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_planner::{
    catalog::Catalog,
    config::{ServerConfig, StorageLocation},
    constants::discovery::SUGGESTION_COUNT,
    logging, storage,
    store::RecipeStore,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe planner CLI",
    long_about = "Search recipes and manage favorites and meal plans from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage directory override (`:memory:` for a throwaway session)
    #[arg(long, global = true)]
    storage_dir: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search the catalog
    Search(commands::search::SearchArgs),

    /// Show one recipe
    Show {
        /// Recipe id
        id: String,
    },

    /// Favorites management commands
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },

    /// Meal plan management commands
    Plans {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Random picks from the catalog
    Recommend {
        /// Narrow candidates with a query
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Number of picks
        #[arg(long, default_value_t = SUGGESTION_COUNT)]
        count: usize,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoritesCommand {
    /// List favorites
    List,
    /// Add a catalog recipe
    Add {
        /// Recipe id
        id: String,
    },
    /// Remove a recipe
    Remove {
        /// Recipe id
        id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// List meal plans
    List,
    /// Create an empty week
    Create {
        /// Plan name
        name: String,
    },
    /// Print a plan (defaults to the newest)
    Show {
        /// Plan id
        #[arg(long)]
        plan: Option<String>,
    },
    /// Put a recipe in a slot
    Add {
        /// Weekday name, e.g. Tuesday
        day: String,
        /// Meal type naming the slot: Breakfast, Lunch or Dinner
        meal_type: String,
        /// Recipe id
        recipe_id: String,
        /// Plan id (defaults to the newest)
        #[arg(long)]
        plan: Option<String>,
    },
    /// Clear a slot
    Remove {
        /// Weekday name
        day: String,
        /// Meal type naming the slot
        meal_type: String,
        /// Plan id (defaults to the newest)
        #[arg(long)]
        plan: Option<String>,
    },
    /// Delete a plan
    Delete {
        /// Plan id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_for_cli(cli.verbose)?;

    let mut config = ServerConfig::from_env()?;
    if let Some(dir) = cli.storage_dir.as_deref() {
        config.storage = StorageLocation::parse(dir);
    }
    debug!("{}", config.summary());

    let backend = storage::open(&config.storage)?;
    let catalog = Catalog::load(&config.catalog).await;
    let mut store = RecipeStore::new(catalog, backend);

    match cli.command {
        Command::Search(args) => commands::search::run(&mut store, args)?,
        Command::Show { id } => commands::search::show(&store, &id)?,
        Command::Favorites { action } => match action {
            FavoritesCommand::List => commands::favorites::list(&store),
            FavoritesCommand::Add { id } => commands::favorites::add(&mut store, &id)?,
            FavoritesCommand::Remove { id } => commands::favorites::remove(&mut store, &id),
        },
        Command::Plans { action } => match action {
            PlanCommand::List => commands::plans::list(&store),
            PlanCommand::Create { name } => commands::plans::create(&mut store, &name)?,
            PlanCommand::Show { plan } => commands::plans::show(&mut store, plan.as_deref())?,
            PlanCommand::Add {
                day,
                meal_type,
                recipe_id,
                plan,
            } => commands::plans::add(&mut store, plan.as_deref(), &day, &meal_type, &recipe_id)?,
            PlanCommand::Remove {
                day,
                meal_type,
                plan,
            } => commands::plans::remove(&mut store, plan.as_deref(), &day, &meal_type)?,
            PlanCommand::Delete { id } => commands::plans::delete(&mut store, &id)?,
        },
        Command::Recommend { query, count, seed } => {
            commands::search::recommend(&store, query.as_deref(), count, seed);
        }
    }

    Ok(())
}
