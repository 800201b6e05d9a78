use recipe_flow_shared::{RecipeCard, RecipeId};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct RecipeCardProps {
    pub card: RecipeCard,
    pub on_toggle_favorite: Callback<RecipeId>,
}

#[function_component(RecipeCardView)]
pub fn recipe_card(props: &RecipeCardProps) -> Html {
    let card = props.card.clone();
    let detail_route = Route::RecipeDetail {
        id: card.id.to_string(),
    };

    let on_favorite_click = {
        let on_toggle = props.on_toggle_favorite.clone();
        let id = card.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    let (heart, favorite_label) = if card.favorite {
        ("♥", "Remove from favorites")
    } else {
        ("♡", "Add to favorites")
    };

    html! {
        <div class="recipe-card-wrapper">
            <Link<Route> to={detail_route} classes={classes!("recipe-card")}>
                <h2>{ &card.name }</h2>
                <p>{ &card.description }</p>
                <div class="recipe-meta">
                    if let Some(category) = card.category.as_ref() {
                        <p class="category-name">{ category }</p>
                    }
                    <p class="difficulty">{ card.difficulty.to_string() }</p>
                    <p class="time">{ card.time_label() }</p>
                </div>
                if let Some(image) = card.image.as_ref() {
                    <img src={image.clone()} alt={card.name.clone()} loading="lazy" />
                }
            </Link<Route>>
            <button
                type="button"
                class={classes!("favorite-button", card.favorite.then_some("filled"))}
                aria-label={favorite_label}
                aria-pressed={card.favorite.to_string()}
                onclick={on_favorite_click}
            >
                { heart }
            </button>
        </div>
    }
}
