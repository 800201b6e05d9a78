use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use gloo_timers::future::TimeoutFuture;
use recipe_flow_shared::{filters::ActiveFilter, Category, CategoryId, FilterState, RecipeFilters};
use yew::prelude::*;

use crate::{api::GlooCatalog, config};

/// The catalog client provided by `App`.
#[hook]
pub fn use_catalog() -> Rc<GlooCatalog> {
    let fallback = use_memo((), |_| GlooCatalog::new(config::API_BASE));
    use_context::<Rc<GlooCatalog>>().unwrap_or(fallback)
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Handle returned by [`use_filter_state`].
#[derive(Clone)]
pub struct UseFilterStateHandle {
    machine: Rc<RefCell<FilterState>>,
    generation: Rc<Cell<u64>>,
    committed: UseStateHandle<RecipeFilters>,
    search_term: UseStateHandle<String>,
}

impl UseFilterStateHandle {
    /// Filters the listing should be fetched with.
    pub fn filters(&self) -> RecipeFilters {
        (*self.committed).clone()
    }

    /// What the search box shows right now.
    pub fn search_term(&self) -> String {
        (*self.search_term).clone()
    }

    pub fn can_reset(&self) -> bool {
        self.machine.borrow().can_reset()
    }

    pub fn active_filters(&self, categories: &[Category]) -> Vec<ActiveFilter> {
        self.machine.borrow().active_filters(categories)
    }

    pub fn input(&self, term: String) {
        self.machine.borrow_mut().input(term.clone(), now_ms());
        self.search_term.set(term);
        self.schedule_commit();
    }

    pub fn clear_keyword(&self) {
        self.machine.borrow_mut().clear_keyword(now_ms());
        self.search_term.set(String::new());
        self.schedule_commit();
    }

    pub fn set_category(&self, category_id: Option<CategoryId>) {
        let committed = self.machine.borrow_mut().set_category(category_id);
        if let Some(next) = committed {
            self.committed.set(next);
        }
    }

    pub fn reset(&self) {
        self.generation.set(self.generation.get() + 1);
        let next = self.machine.borrow_mut().reset();
        self.search_term.set(String::new());
        self.committed.set(next);
    }

    /// Wait out the quiet period of the latest keystroke. Waits started by
    /// earlier keystrokes see a newer generation and give up.
    fn schedule_commit(&self) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let handle = self.clone();

        wasm_bindgen_futures::spawn_local(async move {
            loop {
                let Some(deadline) = handle.machine.borrow().next_deadline() else {
                    return;
                };
                let wait = deadline.saturating_sub(now_ms());
                TimeoutFuture::new(u32::try_from(wait).unwrap_or(u32::MAX)).await;

                if handle.generation.get() != generation {
                    return;
                }
                let committed = handle.machine.borrow_mut().poll(now_ms());
                if let Some(next) = committed {
                    handle.committed.set(next);
                    return;
                }
            }
        });
    }
}

/// Listing filters with debounced free-text search.
///
/// Keystrokes echo into `search_term()` immediately; `filters()` only picks
/// the text up after `delay` of quiet. Category changes and resets apply at
/// once.
#[hook]
pub fn use_filter_state(delay: Duration) -> UseFilterStateHandle {
    let machine = use_mut_ref(|| FilterState::with_delay(delay));
    let generation = use_memo((), |_| Cell::new(0u64));
    let committed = use_state(RecipeFilters::default);
    let search_term = use_state(String::new);

    UseFilterStateHandle {
        machine,
        generation,
        committed,
        search_term,
    }
}
