use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct ErrorStateProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Show a link back to the recipe list.
    #[prop_or(false)]
    pub back_link: bool,
}

#[function_component(ErrorState)]
pub fn error_state(props: &ErrorStateProps) -> Html {
    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
        html! {
            <button type="button" class="retry-button" {onclick}>{ "Retry" }</button>
        }
    });

    html! {
        <div class="error-message" role="alert">
            <h2>{ &props.message }</h2>
            if props.back_link {
                <Link<Route> to={Route::RecipeList}>{ "Return to recipe list" }</Link<Route>>
            }
            { for retry }
        </div>
    }
}
