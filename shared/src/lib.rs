//! Shared core of recipe-flow: catalog data model, the catalog API seam, the
//! favorites store, the debounced filter state machine and the view
//! controllers used by both the browser frontend and the CLI.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub mod api;
pub mod card;
pub mod config;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod filters;
#[cfg(not(target_arch = "wasm32"))]
pub mod http;
pub mod listing;
pub mod sequence;

pub use api::CatalogApi;
pub use card::RecipeCard;
pub use config::CatalogConfig;
pub use error::FetchError;
pub use favorites::{FavoritesSnapshot, FavoritesStore, SharedFavorites};
pub use filters::{FilterState, RecipeFilters};

/// Catalog identifier of a recipe.
pub type RecipeId = u64;

/// Catalog identifier of a category (`"c1"`, `"breakfast"`, ...).
pub type CategoryId = String;

/// How hard a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Weeknight-friendly.
    Easy,
    /// Some technique required.
    Medium,
    /// Long or technique-heavy.
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name.
    pub name: String,
    /// Quantity, in `unit`.
    pub amount: f64,
    /// Unit of `amount` (`"g"`, `"cup"`, ...).
    pub unit: String,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.unit, self.name)
    }
}

/// Per-serving nutrition breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal.
    pub calories: f64,
    /// Protein in grams.
    pub protein: f64,
    /// Carbohydrates in grams.
    pub carbohydrates: f64,
    /// Fat in grams.
    pub fat: f64,
    /// Fiber in grams.
    pub fiber: f64,
}

/// A labelled nutrition value, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionRow {
    /// Field name as the catalog reports it.
    pub label: &'static str,
    /// Numeric value.
    pub value: f64,
    /// Display unit: `kcal` for calories, `g` for everything else.
    pub unit: &'static str,
}

impl fmt::Display for NutritionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == "kcal" {
            write!(f, "{} kcal", self.value)
        } else {
            write!(f, "{}{}", self.value, self.unit)
        }
    }
}

impl Nutrition {
    /// Rows in catalog order: calories, protein, carbohydrates, fat, fiber.
    pub fn rows(&self) -> [NutritionRow; 5] {
        let grams = |label, value| NutritionRow {
            label,
            value,
            unit: "g",
        };
        [
            NutritionRow {
                label: "calories",
                value: self.calories,
                unit: "kcal",
            },
            grams("protein", self.protein),
            grams("carbohydrates", self.carbohydrates),
            grams("fat", self.fat),
            grams("fiber", self.fiber),
        ]
    }
}

// 完整菜谱数据模型
/// Full recipe as returned by `GET /recipes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique catalog id.
    pub id: RecipeId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Category this recipe belongs to.
    pub category_id: CategoryId,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    /// Number of servings.
    pub servings: u32,
    /// Calories per serving.
    pub calories: f64,
    /// Image URL; the catalog sends an empty string when there is none.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub image: Option<String>,
    /// Ordered ingredient list.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Ordered cooking steps.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Nutrition breakdown, when the catalog has one.
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Prep plus cook time, in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Label/value pairs for the detail page meta block.
    pub fn meta_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Difficulty", self.difficulty.to_string()),
            ("Prep Time", format!("{} minutes", self.prep_time)),
            ("Cook Time", format!("{} minutes", self.cook_time)),
            ("Total Time", format!("{} minutes", self.total_minutes())),
            ("Servings", self.servings.to_string()),
            ("Calories per Serving", format!("{} kcal", self.calories)),
        ]
    }
}

// 列表项（精简版）
/// List projection returned by `GET /recipes`: category resolved to its name,
/// no ingredients, instructions or nutrition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeListItem {
    /// Unique catalog id.
    pub id: RecipeId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Category id.
    pub category_id: CategoryId,
    /// Resolved category name. Older catalog builds omit it.
    #[serde(default)]
    pub category: Option<String>,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    /// Image URL, if any.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub image: Option<String>,
}

impl RecipeListItem {
    /// Prep plus cook time, in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

/// A recipe category. Flat, no hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id, used as the `categoryId` filter value.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}
