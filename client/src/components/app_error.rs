//! Fallback rendered by the root error boundary.

use leptos::prelude::*;

/// Application-wide failure screen whose only recovery is a full reload.
#[component]
pub fn AppErrorScreen() -> impl IntoView {
    let on_reload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        <div class="app-error">
            <div class="app-error__card">
                <h2>"Error en la aplicación"</h2>
                <p>"Ha ocurrido un error al cargar los datos. Por favor, intenta recargar la página."</p>
                <button class="btn btn--danger" on:click=on_reload>
                    "Recargar"
                </button>
            </div>
        </div>
    }
}
