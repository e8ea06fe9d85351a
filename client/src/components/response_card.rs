//! One candidate's canned position on the problems page.

use leptos::prelude::*;

use crate::net::types::PLACEHOLDER_IMAGE;
use crate::util::party::PartyTone;
use crate::util::responses::CandidateResponse;

#[component]
pub fn ResponseCard(response: CandidateResponse) -> impl IntoView {
    let tone = PartyTone::of(response.party).modifier();
    let image = if response.image.is_empty() { PLACEHOLDER_IMAGE } else { response.image };

    view! {
        <div class=format!("response-card response-card--{tone}")>
            <div class="response-card__header">
                <img class="response-card__avatar" src=image alt=response.candidate_name/>
                <div>
                    <h4 class="response-card__name">{response.candidate_name}</h4>
                    <p class="response-card__party">{response.party}</p>
                </div>
            </div>
            <div class="response-card__body">
                <p>{response.response}</p>
            </div>
            <div class="response-card__actions">
                <a class="btn btn--accent" href="/">
                    "Chatear con " {response.first_name()}
                </a>
            </div>
        </div>
    }
}
