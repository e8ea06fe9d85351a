//! Scripted chat with the selected candidate.

use leptos::prelude::*;

use crate::net::types::PLACEHOLDER_IMAGE;
use crate::state::candidates::CandidatesState;
use crate::state::chat::ChatState;
use crate::util::clock::{now_ms, time_label};

/// Candidate profile column plus transcript and input.
///
/// Renders an empty-state hint while no candidate is selected.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let candidates = expect_context::<RwSignal<CandidatesState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let selected = Memo::new(move |_| candidates.with(|s| s.selected().cloned()));

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let candidate = selected.get_untracked();
        chat.update(|c| {
            c.send(candidate.as_ref(), now_ms());
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    move || {
        let Some(candidate) = selected.get() else {
            return view! {
                <div class="chat-empty">
                    <h3>"Selecciona un candidato"</h3>
                    <p>"Elige un candidato de arriba para comenzar a conversar"</p>
                </div>
            }
            .into_any();
        };

        let image = if candidate.image.is_empty() { PLACEHOLDER_IMAGE.to_owned() } else { candidate.image.clone() };

        view! {
            <div class="chat-layout">
                <aside class="chat-profile">
                    <div class="chat-profile__avatar">
                        <img src=image alt=candidate.name.clone()/>
                        <span class="chat-profile__online">"En línea"</span>
                    </div>
                    <h3>{candidate.name.clone()}</h3>
                    <p class="chat-profile__party">{candidate.party.clone()}</p>
                    <p class="chat-profile__description">{candidate.description.clone()}</p>
                </aside>

                <div class="chat-panel">
                    <div class="chat-panel__header">
                        <h4>"Conversación con " {candidate.name.clone()}</h4>
                    </div>
                    <div class="chat-panel__messages" node_ref=messages_ref>
                        {move || {
                            chat.with(|c| c.messages.clone())
                                .into_iter()
                                .map(|msg| {
                                    let stamp = time_label(msg.timestamp);
                                    view! {
                                        <div class="chat-panel__row" class:chat-panel__row--user=msg.is_user>
                                            <div class="chat-panel__bubble" class:chat-panel__bubble--user=msg.is_user>
                                                <p class="chat-panel__text">{msg.text}</p>
                                                <p class="chat-panel__time">{stamp}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <div class="chat-panel__input-row">
                        <input
                            class="chat-panel__input"
                            type="text"
                            placeholder="Escribe tu pregunta..."
                            prop:value=move || chat.with(|c| c.input.clone())
                            on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="btn btn--primary chat-panel__send" on:click=move |_| do_send()>
                            "Enviar"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
