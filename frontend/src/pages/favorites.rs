use recipe_flow_shared::{favorites::FavoritesView, RecipeId};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::recipe_card::RecipeCardView, favorites_context::use_favorites, router::Route,
};

#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let favorites = use_favorites();

    // Every card here is a favorite, so toggling always removes.
    let on_remove = {
        let favorites = favorites.clone();
        Callback::from(move |id: RecipeId| favorites.remove(id))
    };

    let body = match FavoritesView::from_snapshot(&favorites.snapshot) {
        FavoritesView::Empty => html! {
            <div class="empty-state">
                <p>{ FavoritesView::EMPTY_MESSAGE }</p>
                <Link<Route> to={Route::RecipeList} classes={classes!("primary-button")}>
                    { "Browse Recipes" }
                </Link<Route>>
            </div>
        },
        FavoritesView::Cards(cards) => html! {
            <div class="recipe-grid">
                { for cards.into_iter().map(|card| {
                    let key = card.id;
                    html! {
                        <RecipeCardView key={key} {card} on_toggle_favorite={on_remove.clone()} />
                    }
                }) }
            </div>
        },
    };

    html! {
        <main class="container">
            <h1>{ "Favorite Recipes" }</h1>
            { body }
        </main>
    }
}
