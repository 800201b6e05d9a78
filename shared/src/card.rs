//! Card projection shared by the list and favorites pages.

use serde::Serialize;

use crate::{Difficulty, Recipe, RecipeId, RecipeListItem};

/// Everything a recipe card renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
    /// Recipe id, also the detail route parameter.
    pub id: RecipeId,
    /// Title.
    pub name: String,
    /// Excerpt.
    pub description: String,
    /// Category name. Cards built from full recipes have none.
    pub category: Option<String>,
    /// Difficulty badge.
    pub difficulty: Difficulty,
    /// Prep plus cook time.
    pub total_minutes: u32,
    /// Image URL, if any.
    pub image: Option<String>,
    /// Whether the recipe is in the favorites store.
    pub favorite: bool,
}

impl RecipeCard {
    /// Mark the card as favorite or not.
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Total time as shown on the card, e.g. `45 min`.
    pub fn time_label(&self) -> String {
        format!("{} min", self.total_minutes)
    }

    /// Route of the detail page.
    pub fn detail_path(&self) -> String {
        format!("/recipe/{}", self.id)
    }
}

impl From<&RecipeListItem> for RecipeCard {
    fn from(item: &RecipeListItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            difficulty: item.difficulty,
            total_minutes: item.total_minutes(),
            image: item.image.clone(),
            favorite: false,
        }
    }
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            category: None,
            difficulty: recipe.difficulty,
            total_minutes: recipe.total_minutes(),
            image: recipe.image.clone(),
            favorite: false,
        }
    }
}
