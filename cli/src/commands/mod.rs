//! Command handlers.

pub mod favorites;
pub mod recipes;

use anyhow::Result;
use recipe_flow_shared::CatalogConfig;
use serde::Serialize;

use crate::cli::{Cli, Commands};

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = CatalogConfig::default().with_base_url(cli.api_base);
    let favorites_file = cli.favorites_file;

    match cli.command {
        Commands::List {
            category,
            keyword,
        } => recipes::list(&config, &favorites_file, category, keyword).await,
        Commands::Show {
            id,
        } => recipes::show(&config, &id).await,
        Commands::Categories => recipes::categories(&config).await,
        Commands::Favorites {
            command,
        } => favorites::run(&config, &favorites_file, command).await,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
