//! Integration tests for the shared catalog flow.
#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
        rc::Rc,
        time::Duration,
    };

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use recipe_flow_shared::{
        detail::{refresh_detail, DetailState, DETAIL_ERROR_MESSAGE},
        listing::{
            load_listing, refresh_listing, toggle_favorite, ListState, ToggleOutcome,
            LIST_ERROR_MESSAGE,
        },
        sequence::RequestSequence,
        CatalogApi, Category, Difficulty, FavoritesStore, FetchError, FilterState, Recipe,
        RecipeFilters, RecipeId, RecipeListItem, SharedFavorites,
    };

    #[derive(Default)]
    struct StubCatalog {
        recipes: Vec<RecipeListItem>,
        categories: Vec<Category>,
        details: HashMap<RecipeId, Recipe>,
        fail_listing: bool,
        fail_categories: bool,
        listing_calls: RefCell<Vec<RecipeFilters>>,
        detail_calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl CatalogApi for StubCatalog {
        async fn list_recipes(
            &self,
            filters: &RecipeFilters,
        ) -> Result<Vec<RecipeListItem>, FetchError> {
            self.listing_calls.borrow_mut().push(filters.clone());
            if self.fail_listing {
                return Err(FetchError::http(500));
            }
            Ok(self.recipes.clone())
        }

        async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, FetchError> {
            self.detail_calls.set(self.detail_calls.get() + 1);
            self.details.get(&id).cloned().ok_or_else(|| FetchError::http(404))
        }

        async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
            if self.fail_categories {
                return Err(FetchError::network("connection refused"));
            }
            Ok(self.categories.clone())
        }
    }

    fn menemen_item() -> RecipeListItem {
        RecipeListItem {
            id: 1,
            name: "Menemen".to_string(),
            description: "Eggs scrambled with tomatoes and peppers".to_string(),
            category_id: "c1".to_string(),
            category: None,
            difficulty: Difficulty::Easy,
            prep_time: 5,
            cook_time: 15,
            image: None,
        }
    }

    fn menemen() -> Recipe {
        Recipe {
            id: 1,
            name: "Menemen".to_string(),
            description: "Eggs scrambled with tomatoes and peppers".to_string(),
            category_id: "c1".to_string(),
            difficulty: Difficulty::Easy,
            prep_time: 5,
            cook_time: 15,
            servings: 2,
            calories: 280.0,
            image: None,
            ingredients: vec![],
            instructions: vec!["Sauté the peppers.".to_string(), "Add eggs.".to_string()],
            nutrition: None,
        }
    }

    fn breakfast() -> Category {
        Category {
            id: "c1".to_string(),
            name: "Breakfast".to_string(),
            description: "Morning dishes".to_string(),
        }
    }

    fn catalog() -> StubCatalog {
        StubCatalog {
            recipes: vec![menemen_item()],
            categories: vec![breakfast()],
            details: HashMap::from([(1, menemen())]),
            ..StubCatalog::default()
        }
    }

    fn favorites() -> SharedFavorites {
        Rc::new(RefCell::new(FavoritesStore::new()))
    }

    #[tokio::test]
    async fn listing_renders_card_under_category_name() {
        let api = catalog();
        let listing = load_listing(&api, &RecipeFilters::default())
            .await
            .expect("listing loads");

        let cards = listing.cards(&FavoritesStore::new());

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Menemen");
        assert_eq!(cards[0].category.as_deref(), Some("Breakfast"));
        assert_eq!(cards[0].time_label(), "20 min");
        assert!(!cards[0].favorite);
    }

    /// Recipes only arrive once the categories request has been made.
    struct HandshakeCatalog {
        categories_sent: RefCell<Option<oneshot::Sender<()>>>,
        categories_seen: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl HandshakeCatalog {
        fn new() -> Self {
            let (tx, rx) = oneshot::channel();
            Self {
                categories_sent: RefCell::new(Some(tx)),
                categories_seen: RefCell::new(Some(rx)),
            }
        }
    }

    #[async_trait(?Send)]
    impl CatalogApi for HandshakeCatalog {
        async fn list_recipes(
            &self,
            _filters: &RecipeFilters,
        ) -> Result<Vec<RecipeListItem>, FetchError> {
            let seen = self.categories_seen.borrow_mut().take();
            if let Some(seen) = seen {
                seen.await.map_err(FetchError::network)?;
            }
            Ok(vec![menemen_item()])
        }

        async fn get_recipe(&self, _id: RecipeId) -> Result<Recipe, FetchError> {
            Err(FetchError::http(404))
        }

        async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
            if let Some(tx) = self.categories_sent.borrow_mut().take() {
                let _ = tx.send(());
            }
            Ok(vec![breakfast()])
        }
    }

    #[tokio::test]
    async fn recipes_and_categories_are_fetched_concurrently() {
        let api = HandshakeCatalog::new();

        let listing = tokio::time::timeout(
            Duration::from_secs(1),
            load_listing(&api, &RecipeFilters::default()),
        )
        .await
        .expect("both fetches in flight together")
        .expect("listing loads");

        assert_eq!(listing.recipes.len(), 1);
        assert_eq!(listing.categories.len(), 1);
    }

    #[tokio::test]
    async fn either_fetch_failing_fails_the_whole_listing() {
        for (fail_listing, fail_categories) in [(true, false), (false, true)] {
            let api = StubCatalog {
                fail_listing,
                fail_categories,
                ..catalog()
            };
            let sequence = RequestSequence::default();

            let state = refresh_listing(&api, &sequence, RecipeFilters::default())
                .await
                .expect("latest load applies");

            assert_eq!(
                state,
                ListState::Failed {
                    message: LIST_ERROR_MESSAGE.to_string(),
                }
            );
        }
    }

    #[tokio::test]
    async fn stale_listing_response_is_dropped() {
        let api = catalog();
        let sequence = RequestSequence::default();
        let older = refresh_listing(
            &api,
            &sequence,
            RecipeFilters {
                keyword: Some("keb".to_string()),
                ..RecipeFilters::default()
            },
        );
        let newer = refresh_listing(
            &api,
            &sequence,
            RecipeFilters {
                keyword: Some("kebab".to_string()),
                ..RecipeFilters::default()
            },
        );

        assert!(matches!(newer.await, Some(ListState::Ready(_))));
        assert_eq!(older.await, None);
    }

    #[tokio::test]
    async fn reset_refetches_unscoped_listing() {
        let api = catalog();
        let sequence = RequestSequence::default();
        let mut filters = FilterState::new();

        let scoped = filters.set_category(Some("c1".to_string())).expect("category commit");
        refresh_listing(&api, &sequence, scoped).await;
        filters.input("menemen", 0);
        if let Some(scoped) = filters.poll(500) {
            refresh_listing(&api, &sequence, scoped).await;
        }

        let cleared = filters.reset();
        refresh_listing(&api, &sequence, cleared).await;

        let calls = api.listing_calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[1].category_id.as_deref(), Some("c1"));
        assert_eq!(calls[1].keyword.as_deref(), Some("menemen"));
        assert!(calls[2].is_empty());
    }

    #[tokio::test]
    async fn toggling_unfavorited_item_fetches_full_recipe() {
        let api = catalog();
        let store = favorites();

        let outcome = toggle_favorite(&api, &store, 1).await;

        assert_eq!(outcome, ToggleOutcome::Added);
        assert_eq!(api.detail_calls.get(), 1);
        assert!(store.borrow().contains(1));
        assert_eq!(store.borrow().list()[0].instructions.len(), 2);
    }

    #[tokio::test]
    async fn toggling_favorite_again_removes_without_fetch() {
        let api = catalog();
        let store = favorites();
        store.borrow_mut().add(menemen());

        let outcome = toggle_favorite(&api, &store, 1).await;

        assert_eq!(outcome, ToggleOutcome::Removed);
        assert_eq!(api.detail_calls.get(), 0);
        assert!(!store.borrow().contains(1));
    }

    #[tokio::test]
    async fn failed_toggle_leaves_favorites_untouched() {
        let api = StubCatalog {
            details: HashMap::new(),
            ..catalog()
        };
        let store = favorites();
        let notified = Rc::new(Cell::new(false));
        {
            let notified = notified.clone();
            store.borrow_mut().subscribe(move |_| notified.set(true));
        }

        let outcome = toggle_favorite(&api, &store, 1).await;

        assert!(matches!(outcome, ToggleOutcome::Failed(_)));
        assert!(!store.borrow().contains(1));
        assert!(!notified.get());
    }

    #[tokio::test]
    async fn favorites_overlay_list_cards() {
        let api = catalog();
        let store = favorites();
        toggle_favorite(&api, &store, 1).await;

        let listing = load_listing(&api, &RecipeFilters::default())
            .await
            .expect("listing loads");
        let cards = listing.cards(&store.borrow());

        assert!(cards[0].favorite);
    }

    #[tokio::test]
    async fn missing_recipe_renders_error_state() {
        let api = catalog();
        let sequence = RequestSequence::default();

        let state = refresh_detail(&api, &sequence, "42".to_string())
            .await
            .expect("latest load applies");

        assert_eq!(
            state,
            DetailState::Failed {
                message: DETAIL_ERROR_MESSAGE.to_string(),
            }
        );
        assert_eq!(api.detail_calls.get(), 1);
    }

    #[tokio::test]
    async fn malformed_route_id_fails_without_network_call() {
        let api = catalog();
        let sequence = RequestSequence::default();

        let state = refresh_detail(&api, &sequence, "not-a-number".to_string()).await;

        assert!(matches!(state, Some(DetailState::Failed { .. })));
        assert_eq!(api.detail_calls.get(), 0);
    }

    #[tokio::test]
    async fn detail_retry_supersedes_earlier_load() {
        let api = catalog();
        let sequence = RequestSequence::default();
        let first = refresh_detail(&api, &sequence, "1".to_string());
        let retry = refresh_detail(&api, &sequence, "1".to_string());

        match retry.await {
            Some(DetailState::Loaded(recipe)) => assert_eq!(recipe.name, "Menemen"),
            other => panic!("unexpected detail state: {other:?}"),
        }
        assert_eq!(first.await, None);
    }
}
