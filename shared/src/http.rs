//! Native catalog client on top of reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    api::{categories_url, recipe_url, recipes_url, CatalogApi},
    Category, CatalogConfig, FetchError, Recipe, RecipeFilters, RecipeId, RecipeListItem,
};

/// [`CatalogApi`] over HTTP for native hosts (CLI, tests against a live
/// catalog). No timeout is imposed beyond the transport's own.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Build a client for the catalog described by `config`.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("recipe-flow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::network)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Catalog base URL in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "GET catalog");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http(status.as_u16()));
        }

        response.json::<T>().await.map_err(FetchError::parse)
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalog {
    async fn list_recipes(&self, filters: &RecipeFilters) -> Result<Vec<RecipeListItem>, FetchError> {
        self.get_json(&recipes_url(&self.base_url, filters)).await
    }

    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, FetchError> {
        self.get_json(&recipe_url(&self.base_url, id)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json(&categories_url(&self.base_url)).await
    }
}
