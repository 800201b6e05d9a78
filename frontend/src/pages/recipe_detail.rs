use recipe_flow_shared::{
    detail::{refresh_detail, DetailState},
    sequence::RequestSequence,
    Recipe,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{error_state::ErrorState, loading_spinner::LoadingSpinner},
    hooks::use_catalog,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct RecipeDetailProps {
    pub id: String,
}

#[function_component(RecipeDetailPage)]
pub fn recipe_detail_page(props: &RecipeDetailProps) -> Html {
    let catalog = use_catalog();
    let state = use_state(DetailState::default);
    let sequence = use_memo((), |_| RequestSequence::default());
    let attempt = use_state(|| 0u32);

    {
        let catalog = catalog.clone();
        let state = state.clone();
        let sequence = sequence.clone();
        use_effect_with((props.id.clone(), *attempt), move |(id, _)| {
            let id = id.clone();
            state.set(DetailState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(next) = refresh_detail(&*catalog, &sequence, id.clone()).await {
                    if matches!(next, DetailState::Failed { .. }) {
                        web_sys::console::error_1(&format!("Failed to fetch recipe {}", id).into());
                    }
                    state.set(next);
                }
            });
            || ()
        });
    }

    // Retry re-issues the same fetch; the effect above reruns on `attempt`.
    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    match &*state {
        DetailState::Loading => html! { <LoadingSpinner /> },
        DetailState::Failed {
            message,
        } => html! {
            <main class="container">
                <ErrorState message={message.clone()} on_retry={on_retry} back_link={true} />
            </main>
        },
        DetailState::Loaded(recipe) => render_recipe(recipe),
    }
}

fn render_recipe(recipe: &Recipe) -> Html {
    html! {
        <main class="container">
            <Link<Route> to={Route::RecipeList} classes={classes!("back-link")}>
                { "← Back to recipes" }
            </Link<Route>>

            <article class="recipe-detail">
                <h1>{ &recipe.name }</h1>
                <p>{ &recipe.description }</p>

                <div class="recipe-meta">
                    { for recipe.meta_rows().into_iter().map(|(label, value)| html! {
                        <div>
                            <strong>{ format!("{label}:") }</strong>
                            { " " }
                            { value }
                        </div>
                    }) }
                </div>

                if let Some(image) = recipe.image.as_ref() {
                    <div class="recipe-image">
                        <img src={image.clone()} alt={recipe.name.clone()} />
                    </div>
                }

                if let Some(nutrition) = recipe.nutrition.as_ref() {
                    <div class="nutrition-grid">
                        { for nutrition.rows().into_iter().map(|row| html! {
                            <div key={row.label} class="nutrition-item">
                                <div class="label">{ row.label }</div>
                                <div class="value">{ row.to_string() }</div>
                            </div>
                        }) }
                    </div>
                }

                if !recipe.ingredients.is_empty() {
                    <section>
                        <h2>{ "Ingredients" }</h2>
                        <ul class="ingredients-list">
                            { for recipe.ingredients.iter().map(|ingredient| html! {
                                <li>{ ingredient.to_string() }</li>
                            }) }
                        </ul>
                    </section>
                }

                if !recipe.instructions.is_empty() {
                    <section>
                        <h2>{ "Instructions" }</h2>
                        <ol class="instructions-list">
                            { for recipe.instructions.iter().map(|step| html! {
                                <li>{ step }</li>
                            }) }
                        </ol>
                    </section>
                }
            </article>
        </main>
    }
}
