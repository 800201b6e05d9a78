use std::rc::Rc;

use recipe_flow_shared::{FavoritesSnapshot, FavoritesStore, RecipeId, SharedFavorites};
use yew::prelude::*;

use crate::storage;

/// Favorites store injected into the page tree, plus the snapshot the tree
/// was last rendered with.
#[derive(Clone)]
pub struct FavoritesContext {
    pub store: SharedFavorites,
    pub snapshot: FavoritesSnapshot,
}

impl PartialEq for FavoritesContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && Rc::ptr_eq(&self.snapshot, &other.snapshot)
    }
}

impl FavoritesContext {
    pub fn contains(&self, id: RecipeId) -> bool {
        self.store.borrow().contains(id)
    }

    pub fn remove(&self, id: RecipeId) {
        FavoritesStore::remove_shared(&self.store, id);
    }
}

#[derive(Properties, PartialEq)]
pub struct FavoritesProviderProps {
    pub children: Html,
}

#[function_component(FavoritesProvider)]
pub fn favorites_provider(props: &FavoritesProviderProps) -> Html {
    let store = use_mut_ref(storage::load_favorites);
    let snapshot = use_state(|| store.borrow().snapshot());

    {
        let store = store.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let subscription = store.borrow_mut().subscribe(move |next: &FavoritesSnapshot| {
                storage::save_favorites(next);
                snapshot.set(next.clone());
            });
            move || store.borrow_mut().unsubscribe(subscription)
        });
    }

    let context = FavoritesContext {
        store,
        snapshot: (*snapshot).clone(),
    };

    html! {
        <ContextProvider<FavoritesContext> context={context}>
            {props.children.clone()}
        </ContextProvider<FavoritesContext>>
    }
}

#[hook]
pub fn use_favorites() -> FavoritesContext {
    let fallback = use_mut_ref(FavoritesStore::new);
    use_context::<FavoritesContext>().unwrap_or_else(|| {
        let snapshot = fallback.borrow().snapshot();
        FavoritesContext {
            snapshot,
            store: fallback,
        }
    })
}
