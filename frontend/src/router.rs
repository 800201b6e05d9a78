use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    RecipeList,

    #[at("/recipe/:id")]
    RecipeDetail { id: String },

    #[at("/favorites")]
    Favorites,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::RecipeList => html! { <pages::recipe_list::RecipeListPage /> },
        Route::RecipeDetail {
            id,
        } => {
            html! { <pages::recipe_detail::RecipeDetailPage id={id} /> }
        },
        Route::Favorites => html! { <pages::favorites::FavoritesPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="App">
                <Header />
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}
