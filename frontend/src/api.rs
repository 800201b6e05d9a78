use async_trait::async_trait;
use gloo_net::http::Request;
use recipe_flow_shared::{
    api::{categories_url, recipe_url, recipes_url},
    CatalogApi, Category, FetchError, Recipe, RecipeFilters, RecipeId, RecipeListItem,
};
use serde::de::DeserializeOwned;

/// Catalog client backed by the browser `fetch` API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlooCatalog {
    base_url: String,
}

impl GlooCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(FetchError::http(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::parse(format!("{:?}", e)))
    }
}

#[async_trait(?Send)]
impl CatalogApi for GlooCatalog {
    /// 获取菜谱列表，支持按分类和关键词过滤
    async fn list_recipes(&self, filters: &RecipeFilters) -> Result<Vec<RecipeListItem>, FetchError> {
        self.get_json(&recipes_url(&self.base_url, filters)).await
    }

    /// 获取菜谱详情
    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, FetchError> {
        self.get_json(&recipe_url(&self.base_url, id)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json(&categories_url(&self.base_url)).await
    }
}
