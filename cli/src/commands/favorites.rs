//! `favorites` subcommands.

use std::{cell::RefCell, path::Path, rc::Rc};

use anyhow::{bail, Context, Result};
use recipe_flow_shared::{
    favorites::FavoritesView,
    http::HttpCatalog,
    listing::{toggle_favorite, ToggleOutcome},
    CatalogApi, CatalogConfig, RecipeCard, RecipeId,
};
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::{cli::FavoritesCommands, favorites_file};

#[derive(Serialize)]
struct FavoritesOutput {
    total: usize,
    favorites: Vec<RecipeCard>,
}

#[derive(Serialize)]
struct FavoriteChange {
    id: RecipeId,
    favorite: bool,
    changed: bool,
}

/// Run one `favorites` subcommand against the favorites file.
pub async fn run(config: &CatalogConfig, path: &Path, command: FavoritesCommands) -> Result<()> {
    let mut store = favorites_file::load(path)?;

    match command {
        FavoritesCommands::List => {
            let favorites = match FavoritesView::from_snapshot(store.list()) {
                FavoritesView::Empty => {
                    info!("{}", FavoritesView::EMPTY_MESSAGE);
                    Vec::new()
                },
                FavoritesView::Cards(cards) => cards,
            };
            print_json(&FavoritesOutput {
                total: favorites.len(),
                favorites,
            })
        },
        FavoritesCommands::Add {
            id,
        } => {
            let changed = if store.contains(id) {
                false
            } else {
                let catalog = HttpCatalog::new(config)?;
                let recipe = catalog
                    .get_recipe(id)
                    .await
                    .with_context(|| format!("failed to fetch recipe {id}"))?;
                store.add(recipe)
            };
            if changed {
                favorites_file::save(path, &store)?;
            }
            print_json(&FavoriteChange {
                id,
                favorite: true,
                changed,
            })
        },
        FavoritesCommands::Remove {
            id,
        } => {
            let changed = store.remove(id);
            if changed {
                favorites_file::save(path, &store)?;
            }
            print_json(&FavoriteChange {
                id,
                favorite: false,
                changed,
            })
        },
        FavoritesCommands::Toggle {
            id,
        } => {
            let catalog = HttpCatalog::new(config)?;
            let shared = Rc::new(RefCell::new(store));
            let favorite = match toggle_favorite(&catalog, &shared, id).await {
                ToggleOutcome::Added => true,
                ToggleOutcome::Removed => false,
                ToggleOutcome::Failed(err) => bail!("failed to fetch recipe {id}: {err}"),
            };
            favorites_file::save(path, &shared.borrow())?;
            print_json(&FavoriteChange {
                id,
                favorite,
                changed: true,
            })
        },
    }
}
