//! Client-side favorites.
//!
//! The store is an explicitly constructed value; hosts inject it where it is
//! needed (a Yew context in the browser, a local in the CLI). Views observe it
//! through [`FavoritesStore::subscribe`]: listeners run synchronously after
//! every mutation that changed the collection and receive the new immutable
//! snapshot. Mutations of a [`SharedFavorites`] go through
//! [`FavoritesStore::add_shared`] and [`FavoritesStore::remove_shared`], which
//! release the borrow before listeners run.

use std::{cell::RefCell, collections::HashSet, fmt, rc::Rc};

use crate::{card::RecipeCard, Recipe, RecipeId};

/// Immutable view of the favorites at one point in time, in insertion order.
pub type FavoritesSnapshot = Rc<[Recipe]>;

/// The store as shared between views on the single UI thread.
pub type SharedFavorites = Rc<RefCell<FavoritesStore>>;

type Listener = Rc<dyn Fn(&FavoritesSnapshot)>;

/// Handle returned by [`FavoritesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Favorited recipes, at most one entry per recipe id.
#[derive(Default)]
pub struct FavoritesStore {
    entries: Vec<Recipe>,
    ids: HashSet<RecipeId>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FavoritesStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted entries. Later duplicates of an id are
    /// dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = Recipe>) -> Self {
        let mut store = Self::new();
        for recipe in entries {
            if store.ids.insert(recipe.id) {
                store.entries.push(recipe);
            }
        }
        store
    }

    /// Restore from the JSON written by [`FavoritesStore::to_json`].
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Recipe> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries))
    }

    /// Serialize the entries as a JSON array of recipes.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Favorite `recipe`. A recipe whose id is already present is ignored.
    /// Returns whether the store changed.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        let changed = self.insert(recipe);
        if changed {
            self.notify();
        }
        changed
    }

    /// Unfavorite `id`. Unknown ids are ignored. Returns whether the store
    /// changed.
    pub fn remove(&mut self, id: RecipeId) -> bool {
        let changed = self.take(id);
        if changed {
            self.notify();
        }
        changed
    }

    /// [`FavoritesStore::add`] on a shared store. Listeners run after the
    /// borrow is released, so they may read `favorites` themselves.
    pub fn add_shared(favorites: &SharedFavorites, recipe: Recipe) -> bool {
        let pending = {
            let mut store = favorites.borrow_mut();
            let pending = store.insert(recipe).then(|| store.pending_notification());
            pending
        };
        Self::deliver(pending)
    }

    /// [`FavoritesStore::remove`] on a shared store, notifying after the
    /// borrow is released.
    pub fn remove_shared(favorites: &SharedFavorites, id: RecipeId) -> bool {
        let pending = {
            let mut store = favorites.borrow_mut();
            let pending = store.take(id).then(|| store.pending_notification());
            pending
        };
        Self::deliver(pending)
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[Recipe] {
        &self.entries
    }

    /// Whether `id` is a favorite.
    pub fn contains(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No favorites yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the current entries.
    pub fn snapshot(&self) -> FavoritesSnapshot {
        Rc::from(self.entries.as_slice())
    }

    /// Register `listener`. It is called with each new snapshot.
    ///
    /// With plain [`FavoritesStore::add`] and [`FavoritesStore::remove`]
    /// listeners run while the store is mutably borrowed; shared stores use
    /// the `*_shared` variants so listeners can borrow it again.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&FavoritesSnapshot) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Drop a listener. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(subscription, _)| *subscription != id);
    }

    fn insert(&mut self, recipe: Recipe) -> bool {
        if !self.ids.insert(recipe.id) {
            return false;
        }
        self.entries.push(recipe);
        true
    }

    fn take(&mut self, id: RecipeId) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.entries.retain(|recipe| recipe.id != id);
        true
    }

    fn pending_notification(&self) -> (FavoritesSnapshot, Vec<Listener>) {
        let listeners = self.listeners.iter().map(|(_, listener)| listener.clone()).collect();
        (self.snapshot(), listeners)
    }

    fn deliver(pending: Option<(FavoritesSnapshot, Vec<Listener>)>) -> bool {
        let Some((snapshot, listeners)) = pending else {
            return false;
        };
        for listener in listeners {
            listener(&snapshot);
        }
        true
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &self.listeners {
            listener(&snapshot);
        }
    }
}

/// What the favorites page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesView {
    /// Nothing saved: show the call to action linking back to the list.
    Empty,
    /// One card per favorite, all marked as favorite.
    Cards(Vec<RecipeCard>),
}

impl FavoritesView {
    /// Headline of the call to action.
    pub const EMPTY_MESSAGE: &'static str =
        "You haven't added any recipes to your favorites yet.";

    /// Build the view from a snapshot.
    pub fn from_snapshot(favorites: &[Recipe]) -> Self {
        if favorites.is_empty() {
            return FavoritesView::Empty;
        }
        FavoritesView::Cards(
            favorites
                .iter()
                .map(|recipe| RecipeCard::from(recipe).with_favorite(true))
                .collect(),
        )
    }
}
