//! Browser frontend of recipe-flow, built with Yew.

mod api;
mod components;
mod config;
mod favorites_context;
mod hooks;
mod pages;
mod router;
mod storage;

use std::rc::Rc;

use yew::prelude::*;

use crate::{api::GlooCatalog, favorites_context::FavoritesProvider};

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| GlooCatalog::new(config::API_BASE));

    html! {
        <ContextProvider<Rc<GlooCatalog>> context={catalog}>
            <FavoritesProvider>
                <router::AppRouter />
            </FavoritesProvider>
        </ContextProvider<Rc<GlooCatalog>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
