//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recipe_flow_shared::{config::DEFAULT_API_BASE, RecipeId};

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "rf-cli", version, about = "Recipe catalog CLI")]
pub struct Cli {
    /// Catalog base URL.
    #[arg(long, global = true, env = "RECIPE_FLOW_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// JSON file holding favorite recipes.
    #[arg(long, global = true, default_value = "./data/favorites.json")]
    pub favorites_file: PathBuf,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List recipes, optionally filtered by category and keyword.
    List {
        /// Category id (see `categories`).
        #[arg(long)]
        category: Option<String>,
        /// Free-text search.
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Show one recipe in full.
    Show {
        /// Recipe id.
        id: String,
    },
    /// List recipe categories.
    Categories,
    /// Manage favorites.
    Favorites {
        /// Favorites action.
        #[command(subcommand)]
        command: FavoritesCommands,
    },
}

/// `favorites` subcommands.
#[derive(Debug, Subcommand)]
pub enum FavoritesCommands {
    /// Print saved favorites.
    List,
    /// Fetch a recipe and save it as favorite.
    Add {
        /// Recipe id.
        id: RecipeId,
    },
    /// Remove a recipe from favorites.
    Remove {
        /// Recipe id.
        id: RecipeId,
    },
    /// Add the recipe if missing, remove it otherwise.
    Toggle {
        /// Recipe id.
        id: RecipeId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_accepts_both_filters() {
        let cli = Cli::try_parse_from([
            "rf-cli",
            "list",
            "--category",
            "c1",
            "--keyword",
            "kebab",
            "--api-base",
            "http://localhost:3000/api",
        ])
        .expect("parse args");

        assert_eq!(cli.api_base, "http://localhost:3000/api");
        match cli.command {
            Commands::List {
                category,
                keyword,
            } => {
                assert_eq!(category.as_deref(), Some("c1"));
                assert_eq!(keyword.as_deref(), Some("kebab"));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn favorites_ids_must_be_numeric() {
        assert!(Cli::try_parse_from(["rf-cli", "favorites", "add", "12"]).is_ok());
        assert!(Cli::try_parse_from(["rf-cli", "favorites", "add", "menemen"]).is_err());
    }
}
