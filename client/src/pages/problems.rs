//! Problems page: country problems and each candidate's canned position.

use leptos::prelude::*;

use crate::components::load_error::{LoadError, LoadingSpinner};
use crate::components::response_card::ResponseCard;
use crate::net::types::Problem;
use crate::state::page::PageGate;
use crate::state::problems::ProblemsState;

#[component]
pub fn ProblemsPage() -> impl IntoView {
    let problems = expect_context::<RwSignal<ProblemsState>>();

    Effect::new(move || load_problems(problems));
    let on_retry = Callback::new(move |()| load_problems(problems));

    let gate = Memo::new(move |_| problems.with(ProblemsState::gate));
    let items = Memo::new(move |_| problems.with(|s| s.items.clone()));
    let selected = Memo::new(move |_| problems.with(|s| s.selected().cloned()));

    // Rebuilt only when the selected problem changes.
    let content = move || {
        selected.get().map(|problem| {
            let cards = problems
                .with_untracked(ProblemsState::selected_responses)
                .iter()
                .copied()
                .map(|response| view! { <ResponseCard response=response/> })
                .collect::<Vec<_>>();
            view! {
                <div class="problems-page__heading">
                    <h3>"Propuestas para: " {problem.title}</h3>
                    <p>{problem.description}</p>
                </div>
                <div class="problems-page__responses">{cards}</div>
            }
        })
    };

    move || match gate.get() {
        PageGate::Loading => view! { <LoadingSpinner/> }.into_any(),
        PageGate::Failed(message) => view! { <LoadError message=message on_retry=on_retry/> }.into_any(),
        PageGate::Ready => view! {
            <div class="problems-page">
                <header class="page-header">
                    <a class="btn page-header__back" href="/" aria-label="Volver">"←"</a>
                    <div>
                        <h1>"Problemas del País"</h1>
                        <p class="page-header__subtitle">"Conoce las propuestas de todos los candidatos"</p>
                    </div>
                </header>

                <div class="problems-page__layout">
                    <nav class="problem-menu">
                        <h2>"Problemas más fuertes del país"</h2>
                        <For
                            each=move || items.get().into_iter().enumerate()
                            key=|(position, problem): &(usize, Problem)| (*position, problem.id.clone())
                            children=move |(_, problem): (usize, Problem)| {
                                let id = problem.id.clone();
                                let active = {
                                    let id = id.clone();
                                    move || problems.with(|s| s.is_selected(&id))
                                };
                                view! {
                                    <button
                                        class="problem-menu__item"
                                        class:problem-menu__item--active=active
                                        on:click=move |_| problems.update(|s| s.select(&id))
                                    >
                                        <div class="problem-menu__title">{problem.title}</div>
                                        <div class="problem-menu__description">{problem.description}</div>
                                    </button>
                                }
                            }
                        />
                    </nav>
                    <div class="problems-page__content">{content}</div>
                </div>
            </div>
        }
        .into_any(),
    }
}

fn load_problems(problems: RwSignal<ProblemsState>) {
    problems.update(ProblemsState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_problems().await;
        problems.update(|s| s.finish_load(result));
    });
}
