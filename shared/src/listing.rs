//! Recipe listing orchestration.
//!
//! Every load fetches the filtered recipes and the category list
//! concurrently and fails as a whole when either call fails. Loads are
//! sequenced: a response that arrives after a newer load was issued is
//! discarded.

use std::future::Future;

use tracing::{debug, warn};

use crate::{
    card::RecipeCard,
    sequence::RequestSequence,
    CatalogApi, Category, FavoritesStore, FetchError, RecipeFilters, RecipeId, RecipeListItem,
    SharedFavorites,
};

/// Message shown when the listing cannot be loaded.
pub const LIST_ERROR_MESSAGE: &str = "Failed to load recipes. Please try again later.";

/// Page heading of the listing.
pub const LIST_TITLE: &str = "Turkish Recipes";

/// Both halves of a successful listing load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    /// Recipes matching the filters the load was issued with.
    pub recipes: Vec<RecipeListItem>,
    /// All categories, for the category selector.
    pub categories: Vec<Category>,
}

impl Listing {
    /// Cards in catalog order, overlaid with favorites membership. A list
    /// item without a resolved category name falls back to the category
    /// list.
    pub fn cards(&self, favorites: &FavoritesStore) -> Vec<RecipeCard> {
        self.recipes
            .iter()
            .map(|item| {
                let mut card = RecipeCard::from(item).with_favorite(favorites.contains(item.id));
                if card.category.is_none() {
                    card.category = self.category_name(&item.category_id).map(str::to_string);
                }
                card
            })
            .collect()
    }

    /// Display name of a category id.
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.as_str())
    }
}

/// Renderable state of the listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    /// First load in flight.
    #[default]
    Loading,
    /// Both fetches succeeded.
    Ready(Listing),
    /// One of the fetches failed.
    Failed {
        /// Generic, user-facing message.
        message: String,
    },
}

impl From<Result<Listing, FetchError>> for ListState {
    fn from(result: Result<Listing, FetchError>) -> Self {
        match result {
            Ok(listing) => ListState::Ready(listing),
            Err(err) => {
                warn!(%err, "recipe listing failed");
                ListState::Failed {
                    message: LIST_ERROR_MESSAGE.to_string(),
                }
            },
        }
    }
}

/// Fetch recipes for `filters` and all categories concurrently.
pub async fn load_listing<A>(api: &A, filters: &RecipeFilters) -> Result<Listing, FetchError>
where
    A: CatalogApi + ?Sized,
{
    let (recipes, categories) =
        futures::try_join!(api.list_recipes(filters), api.list_categories())?;
    Ok(Listing {
        recipes,
        categories,
    })
}

/// Issue a sequenced listing load.
///
/// The ticket is taken when this function is called, not when the future is
/// first polled. The future resolves to `None` when a newer load was issued
/// on `sequence` in the meantime.
pub fn refresh_listing<'a, A>(
    api: &'a A,
    sequence: &'a RequestSequence,
    filters: RecipeFilters,
) -> impl Future<Output = Option<ListState>> + 'a
where
    A: CatalogApi + ?Sized,
{
    let ticket = sequence.issue();
    async move {
        let result = load_listing(api, &filters).await;
        if !sequence.is_current(ticket) {
            debug!(?filters, "dropping stale recipe listing");
            return None;
        }
        Some(ListState::from(result))
    }
}

/// Result of a favorite toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The recipe was fetched and stored.
    Added,
    /// The recipe was already a favorite and has been removed.
    Removed,
    /// Fetching the full recipe failed; favorites are unchanged.
    Failed(FetchError),
}

/// Flip favorite membership of a listed recipe.
///
/// List items lack ingredients, instructions and nutrition, so adding
/// fetches the full recipe first. Removal needs no fetch. A failed fetch is
/// logged and reported through the outcome; the page does not show it.
pub async fn toggle_favorite<A>(api: &A, favorites: &SharedFavorites, id: RecipeId) -> ToggleOutcome
where
    A: CatalogApi + ?Sized,
{
    let already_favorite = favorites.borrow().contains(id);
    if already_favorite {
        FavoritesStore::remove_shared(favorites, id);
        return ToggleOutcome::Removed;
    }

    match api.get_recipe(id).await {
        Ok(recipe) => {
            FavoritesStore::add_shared(favorites, recipe);
            ToggleOutcome::Added
        },
        Err(err) => {
            warn!(recipe_id = id, %err, "could not fetch recipe for favorites");
            ToggleOutcome::Failed(err)
        },
    }
}
