//! Home page: candidate strip plus scripted chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! The candidate directory is loaded in the browser on every mount and on
//! retry. The transcript lives only as long as this page is mounted.

use leptos::prelude::*;

use crate::components::candidate_card::CandidateCard;
use crate::components::chat_panel::ChatPanel;
use crate::components::load_error::{LoadError, LoadingSpinner};
use crate::net::types::Candidate;
use crate::state::candidates::CandidatesState;
use crate::state::chat::ChatState;
use crate::state::page::PageGate;
use crate::util::clock::now_ms;

#[component]
pub fn CandidatesPage() -> impl IntoView {
    let candidates = expect_context::<RwSignal<CandidatesState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    Effect::new(move || load_candidates(candidates));
    on_cleanup(move || chat.update(ChatState::clear));

    let on_retry = Callback::new(move |()| load_candidates(candidates));
    let on_select = Callback::new(move |candidate: Candidate| {
        candidates.update(|s| s.select(&candidate.id));
        chat.update(|c| c.seed(&candidate, now_ms()));
    });

    let gate = Memo::new(move |_| candidates.with(CandidatesState::gate));
    let items = Memo::new(move |_| candidates.with(|s| s.items.clone()));

    move || match gate.get() {
        PageGate::Loading => view! { <LoadingSpinner/> }.into_any(),
        PageGate::Failed(message) => view! { <LoadError message=message on_retry=on_retry/> }.into_any(),
        PageGate::Ready => view! {
            <div class="candidates-page">
                <header class="page-header">
                    <div>
                        <h1>"Candidatos Interactivos"</h1>
                        <p class="page-header__subtitle">"Selecciona un candidato y conversa con él"</p>
                    </div>
                    <a class="btn page-header__link" href="/problemas">
                        "Ver Problemas del País →"
                    </a>
                </header>

                <section class="candidates-page__strip">
                    <h2>"Selecciona tu Candidato"</h2>
                    <div class="candidate-strip">
                        <For
                            each=move || items.get().into_iter().enumerate()
                            key=|(position, candidate): &(usize, Candidate)| (*position, candidate.id.clone())
                            children=move |(_, candidate): (usize, Candidate)| {
                                let id = candidate.id.clone();
                                let selected = Signal::derive(move || candidates.with(|s| s.is_selected(&id)));
                                view! { <CandidateCard candidate=candidate selected=selected on_select=on_select/> }
                            }
                        />
                    </div>
                </section>

                <section class="candidates-page__chat">
                    <ChatPanel/>
                </section>
            </div>
        }
        .into_any(),
    }
}

/// Start a fresh directory load. Overlapping calls are not deduplicated.
fn load_candidates(candidates: RwSignal<CandidatesState>) {
    candidates.update(CandidatesState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_candidates().await;
        candidates.update(|s| s.finish_load(result));
    });
}
