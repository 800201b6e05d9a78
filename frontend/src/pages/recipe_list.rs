use recipe_flow_shared::{
    filters::ActiveFilter,
    listing::{refresh_listing, toggle_favorite, ListState, Listing, ToggleOutcome, LIST_TITLE},
    sequence::RequestSequence,
    RecipeId,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    components::{
        error_state::ErrorState, loading_spinner::LoadingSpinner, recipe_card::RecipeCardView,
    },
    config,
    favorites_context::use_favorites,
    hooks::{use_catalog, use_filter_state, UseFilterStateHandle},
};

#[function_component(RecipeListPage)]
pub fn recipe_list_page() -> Html {
    let catalog = use_catalog();
    let favorites = use_favorites();
    let filter = use_filter_state(config::SEARCH_DEBOUNCE);
    let state = use_state(ListState::default);
    let sequence = use_memo((), |_| RequestSequence::default());
    let reload = use_state(|| 0u32);

    {
        let catalog = catalog.clone();
        let state = state.clone();
        let sequence = sequence.clone();
        use_effect_with((filter.filters(), *reload), move |(filters, _)| {
            let filters = filters.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match refresh_listing(&*catalog, &sequence, filters).await {
                    Some(ListState::Failed {
                        message,
                    }) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch recipes: {}", message).into(),
                        );
                        state.set(ListState::Failed {
                            message,
                        });
                    },
                    Some(next) => state.set(next),
                    None => {},
                }
            });
            || ()
        });
    }

    let on_retry = {
        let state = state.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            state.set(ListState::Loading);
            reload.set(*reload + 1);
        })
    };

    let on_toggle_favorite = {
        let catalog = catalog.clone();
        let store = favorites.store.clone();
        Callback::from(move |id: RecipeId| {
            let catalog = catalog.clone();
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let ToggleOutcome::Failed(e) = toggle_favorite(&*catalog, &store, id).await {
                    web_sys::console::warn_1(
                        &format!("Failed to add recipe {} to favorites: {}", id, e).into(),
                    );
                }
            });
        })
    };

    let listing = match &*state {
        ListState::Loading => return html! { <LoadingSpinner /> },
        ListState::Failed {
            message,
        } => {
            return html! {
                <main class="container">
                    <ErrorState message={message.clone()} on_retry={on_retry} />
                </main>
            };
        },
        ListState::Ready(listing) => listing,
    };

    let cards = listing.cards(&favorites.store.borrow());

    html! {
        <main class="container">
            <h1>{ LIST_TITLE }</h1>
            { render_filters(&filter, listing, &reload) }
            {
                if cards.is_empty() {
                    html! { <p class="empty-hint">{ "No recipes match your filters." }</p> }
                } else {
                    html! {
                        <div class="recipe-grid">
                            { for cards.into_iter().map(|card| {
                                let key = card.id;
                                html! {
                                    <RecipeCardView
                                        key={key}
                                        {card}
                                        on_toggle_favorite={on_toggle_favorite.clone()}
                                    />
                                }
                            }) }
                        </div>
                    }
                }
            }
        </main>
    }
}

fn render_filters(
    filter: &UseFilterStateHandle,
    listing: &Listing,
    reload: &UseStateHandle<u32>,
) -> Html {
    let filters = filter.filters();

    let on_search_input = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                filter.input(target.value());
            }
        })
    };

    let on_category_change = {
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                let value = target.value();
                filter.set_category(if value.is_empty() { None } else { Some(value) });
            }
        })
    };

    // Reset always refetches, even when the committed filters were already
    // empty and only the search box had text.
    let on_reset = {
        let filter = filter.clone();
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| {
            filter.reset();
            reload.set(*reload + 1);
        })
    };

    let active = filter.active_filters(&listing.categories);

    html! {
        <div class="filters-section">
            <h2>{ "Filters" }</h2>
            <div class="filters-grid">
                <div class="filter-group">
                    <label for="search-input">{ "Search:" }</label>
                    <input
                        id="search-input"
                        type="text"
                        class="search-input"
                        placeholder="Search recipes..."
                        value={filter.search_term()}
                        oninput={on_search_input}
                    />
                </div>
                <div class="filter-group">
                    <label for="category-filter">{ "Category:" }</label>
                    <select id="category-filter" onchange={on_category_change}>
                        <option value="" selected={filters.category_id.is_none()}>
                            { "All Categories" }
                        </option>
                        { for listing.categories.iter().map(|category| {
                            let selected = filters.category_id.as_deref() == Some(category.id.as_str());
                            html! {
                                <option key={category.id.clone()} value={category.id.clone()} {selected}>
                                    { &category.name }
                                </option>
                            }
                        }) }
                    </select>
                </div>
                <button
                    type="button"
                    class="reset-filters"
                    onclick={on_reset}
                    disabled={!filter.can_reset()}
                >
                    { "Reset Filters" }
                </button>
            </div>
            if !active.is_empty() {
                <div class="active-filters">
                    <span>{ "Active Filters:" }</span>
                    { for active.into_iter().map(|tag| render_active_filter(filter, tag)) }
                </div>
            }
        </div>
    }
}

fn render_active_filter(filter: &UseFilterStateHandle, tag: ActiveFilter) -> Html {
    let label = tag.label();
    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| match &tag {
            ActiveFilter::Keyword(_) => filter.clear_keyword(),
            ActiveFilter::Category { .. } => filter.set_category(None),
        })
    };

    html! {
        <div class="filter-tag">
            { label }
            <button type="button" aria-label="Clear filter" onclick={on_clear}>{ "×" }</button>
        </div>
    }
}
