use yew::prelude::*;

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="loading" role="status" aria-live="polite" aria-busy="true">
            <div class="loading-spinner" />
            <span class="sr-only">{ "Loading..." }</span>
        </div>
    }
}
