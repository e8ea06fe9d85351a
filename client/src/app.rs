//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_error::AppErrorScreen;
use crate::pages::{candidates::CandidatesPage, problems::ProblemsPage};
use crate::state::{candidates::CandidatesState, chat::ChatState, problems::ProblemsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides page state contexts, wraps every route in an error boundary, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let candidates = RwSignal::new(CandidatesState::default());
    let chat = RwSignal::new(ChatState::default());
    let problems = RwSignal::new(ProblemsState::default());

    provide_context(candidates);
    provide_context(chat);
    provide_context(problems);

    view! {
        <Stylesheet id="leptos" href="/pkg/candidatos.css"/>
        <Title text="Candidatos Interactivos"/>

        <ErrorBoundary fallback=|_errors| {
            log::error!("unhandled rendering error; offering reload");
            view! { <AppErrorScreen/> }
        }>
            <Router>
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=CandidatesPage/>
                    <Route path=StaticSegment("problemas") view=ProblemsPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}
