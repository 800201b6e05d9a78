use yew::prelude::*;
use yew_router::prelude::*;

use crate::{favorites_context::use_favorites, router::Route};

#[function_component(Header)]
pub fn header() -> Html {
    let favorites = use_favorites();
    let route = use_route::<Route>();
    let favorites_label = match favorites.snapshot.len() {
        0 => "Favorites".to_string(),
        count => format!("Favorites ({count})"),
    };

    let nav_class = |target: Route| {
        if route.as_ref() == Some(&target) {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    html! {
        <header class="site-header">
            <nav class="container nav">
                <Link<Route> to={Route::RecipeList} classes={nav_class(Route::RecipeList)}>
                    { "Recipes" }
                </Link<Route>>
                <Link<Route> to={Route::Favorites} classes={nav_class(Route::Favorites)}>
                    { favorites_label }
                </Link<Route>>
            </nav>
        </header>
    }
}
