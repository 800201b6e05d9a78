//! Catalog client configuration.

use std::time::Duration;

/// Base URL of the public recipe catalog.
pub const DEFAULT_API_BASE: &str = "https://case-backend.vercel.app/api";

/// Quiet period before a typed search term is committed.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Settings shared by every catalog host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog base URL, without a trailing slash.
    pub base_url: String,
    /// Debounce delay applied to free-text search.
    pub search_debounce: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl CatalogConfig {
    /// Point at a different catalog deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the search debounce delay.
    pub fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_debounce = delay;
        self
    }
}
