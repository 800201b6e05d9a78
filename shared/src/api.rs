//! The catalog service seam.
//!
//! Three read-only calls against the remote catalog:
//!
//! - `GET /recipes?categoryId=&keyword=`
//! - `GET /recipes/{id}`
//! - `GET /categories`
//!
//! Implementations only move parameters and decode JSON. The URL builders
//! below are shared so every client encodes filters the same way.

use async_trait::async_trait;

use crate::{Category, FetchError, Recipe, RecipeFilters, RecipeId, RecipeListItem};

/// Read access to the recipe catalog.
///
/// Futures are not `Send`: the browser client runs on the single UI thread.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// Recipes matching `filters`, in catalog order.
    async fn list_recipes(&self, filters: &RecipeFilters) -> Result<Vec<RecipeListItem>, FetchError>;

    /// One full recipe. A missing recipe is an error like any other.
    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, FetchError>;

    /// All categories, in catalog order.
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError>;
}

/// `GET /recipes` URL with the present filters as query parameters.
pub fn recipes_url(base_url: &str, filters: &RecipeFilters) -> String {
    let mut url = format!("{}/recipes", base_url.trim_end_matches('/'));
    let params = filters
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>();

    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// `GET /recipes/{id}` URL.
pub fn recipe_url(base_url: &str, id: RecipeId) -> String {
    format!("{}/recipes/{id}", base_url.trim_end_matches('/'))
}

/// `GET /categories` URL.
pub fn categories_url(base_url: &str) -> String {
    format!("{}/categories", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://catalog.example/api";

    #[test]
    fn unfiltered_listing_has_no_query_string() {
        assert_eq!(
            recipes_url(BASE, &RecipeFilters::default()),
            "https://catalog.example/api/recipes"
        );
    }

    #[test]
    fn filters_are_encoded_and_combined() {
        let filters = RecipeFilters {
            category_id: Some("c1".to_string()),
            keyword: Some("kebab k&ş".to_string()),
        };
        assert_eq!(
            recipes_url(BASE, &filters),
            "https://catalog.example/api/recipes?categoryId=c1&keyword=kebab%20k%26%C5%9F"
        );
    }

    #[test]
    fn detail_and_category_urls() {
        assert_eq!(recipe_url("http://localhost:3000/api/", 42), "http://localhost:3000/api/recipes/42");
        assert_eq!(categories_url(BASE), "https://catalog.example/api/categories");
    }
}
