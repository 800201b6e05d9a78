//! Configuration for the frontend application

use std::time::Duration;

use recipe_flow_shared::config::{DEFAULT_API_BASE, DEFAULT_SEARCH_DEBOUNCE};

// API base URL - 编译时从环境变量读取，默认公共 catalog 地址
pub const API_BASE: &str = match option_env!("RECIPE_FLOW_API_BASE") {
    Some(url) => url,
    None => DEFAULT_API_BASE,
};

/// Quiet period before typed search text is sent to the catalog.
pub const SEARCH_DEBOUNCE: Duration = DEFAULT_SEARCH_DEBOUNCE;

/// localStorage key holding the favorites as a JSON array of recipes.
pub const FAVORITES_STORAGE_KEY: &str = "recipe-flow:favorites";

/// localStorage key that unreadable favorites are moved to.
pub const FAVORITES_CORRUPT_KEY: &str = "recipe-flow:favorites.corrupt";
