//! Recipe detail loading.

use std::future::Future;

use tracing::{debug, warn};

use crate::{sequence::RequestSequence, CatalogApi, FetchError, Recipe, RecipeId};

/// Message shown when a recipe cannot be loaded, whatever the cause.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load recipe. Please try again later.";

/// Renderable state of the detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Fetch failed; the page links back to the list and offers a retry.
    Failed {
        /// Generic, user-facing message.
        message: String,
    },
    /// Recipe ready to render.
    Loaded(Box<Recipe>),
}

impl From<Result<Recipe, FetchError>> for DetailState {
    fn from(result: Result<Recipe, FetchError>) -> Self {
        match result {
            Ok(recipe) => DetailState::Loaded(Box::new(recipe)),
            Err(err) => {
                warn!(%err, "recipe detail failed");
                DetailState::Failed {
                    message: DETAIL_ERROR_MESSAGE.to_string(),
                }
            },
        }
    }
}

/// Parse the `:id` route segment.
pub fn parse_recipe_id(raw: &str) -> Result<RecipeId, FetchError> {
    raw.trim()
        .parse::<RecipeId>()
        .map_err(|_| FetchError::new(format!("invalid recipe id: {raw:?}")))
}

/// Fetch the recipe behind a route id.
pub async fn load_detail<A>(api: &A, raw_id: &str) -> Result<Recipe, FetchError>
where
    A: CatalogApi + ?Sized,
{
    let id = parse_recipe_id(raw_id)?;
    api.get_recipe(id).await
}

/// Issue a sequenced detail load; resolves to `None` when the route moved on
/// to another recipe (or a retry was issued) before this one finished.
pub fn refresh_detail<'a, A>(
    api: &'a A,
    sequence: &'a RequestSequence,
    raw_id: String,
) -> impl Future<Output = Option<DetailState>> + 'a
where
    A: CatalogApi + ?Sized,
{
    let ticket = sequence.issue();
    async move {
        let result = load_detail(api, &raw_id).await;
        if !sequence.is_current(ticket) {
            debug!(recipe_id = %raw_id, "dropping stale recipe detail");
            return None;
        }
        Some(DetailState::from(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_ids_must_be_integers() {
        assert_eq!(parse_recipe_id("42"), Ok(42));
        assert_eq!(parse_recipe_id(" 7 "), Ok(7));
        assert!(parse_recipe_id("menemen").is_err());
        assert!(parse_recipe_id("-1").is_err());
    }

    #[test]
    fn failures_collapse_to_generic_message() {
        let state = DetailState::from(Err(FetchError::http(404)));
        assert_eq!(
            state,
            DetailState::Failed {
                message: DETAIL_ERROR_MESSAGE.to_string(),
            }
        );
    }
}
