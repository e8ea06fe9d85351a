//! Page-level load failure with a retry action.

use leptos::prelude::*;

#[component]
pub fn LoadError(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="load-error">
            <h2 class="load-error__message">{message}</h2>
            <button class="btn btn--danger" on:click=move |_| on_retry.run(())>
                "Intentar nuevamente"
            </button>
        </div>
    }
}

/// Full-page spinner shown while a directory loads.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="page-loading">
            <div class="page-loading__spinner" aria-label="Cargando"></div>
        </div>
    }
}
