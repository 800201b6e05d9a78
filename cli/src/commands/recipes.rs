//! `list`, `show` and `categories`.

use std::path::Path;

use anyhow::{Context, Result};
use recipe_flow_shared::{
    detail::load_detail, http::HttpCatalog, listing::load_listing, CatalogApi, CatalogConfig,
    RecipeCard, RecipeFilters,
};
use serde::Serialize;
use tracing::info;

use super::print_json;
use crate::favorites_file;

#[derive(Serialize)]
struct RecipeListOutput<'a> {
    filters: &'a RecipeFilters,
    total: usize,
    recipes: Vec<RecipeCard>,
}

/// Print recipe cards matching the filters, flagged with favorite state.
pub async fn list(
    config: &CatalogConfig,
    favorites_path: &Path,
    category: Option<String>,
    keyword: Option<String>,
) -> Result<()> {
    let catalog = HttpCatalog::new(config)?;
    let favorites = favorites_file::load(favorites_path)?;
    let filters = RecipeFilters::from_parts(category, keyword);

    let listing = load_listing(&catalog, &filters)
        .await
        .context("failed to load recipes")?;
    let recipes = listing.cards(&favorites);
    info!(total = recipes.len(), "recipes loaded");

    print_json(&RecipeListOutput {
        filters: &filters,
        total: recipes.len(),
        recipes,
    })
}

/// Print one recipe in full.
pub async fn show(config: &CatalogConfig, id: &str) -> Result<()> {
    let catalog = HttpCatalog::new(config)?;
    let recipe = load_detail(&catalog, id)
        .await
        .with_context(|| format!("failed to load recipe {id}"))?;
    print_json(&recipe)
}

/// Print all categories.
pub async fn categories(config: &CatalogConfig) -> Result<()> {
    let catalog = HttpCatalog::new(config)?;
    let categories = catalog
        .list_categories()
        .await
        .context("failed to load categories")?;
    print_json(&categories)
}
