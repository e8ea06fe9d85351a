//! Card for one candidate in the home page strip.

use leptos::prelude::*;

use crate::net::types::{Candidate, PLACEHOLDER_IMAGE};
use crate::util::party::{PartyTone, badge_label};

/// A candidate profile with its party badge and a "talk" button.
#[component]
pub fn CandidateCard(
    candidate: Candidate,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<Candidate>,
) -> impl IntoView {
    let tone = PartyTone::of(&candidate.party).modifier();
    let image = if candidate.image.is_empty() { PLACEHOLDER_IMAGE.to_owned() } else { candidate.image.clone() };
    let badge = badge_label(&candidate.party).to_owned();
    let Candidate { name, party, description, .. } = candidate.clone();

    view! {
        <div class="candidate-card" class:candidate-card--selected=move || selected.get()>
            <div class=format!("candidate-card__body candidate-card__body--{tone}")>
                <div class=format!("candidate-card__avatar candidate-card__avatar--{tone}")>
                    <img src=image alt=name.clone()/>
                </div>
                <h3 class="candidate-card__name">{name}</h3>
                <p class=format!("candidate-card__party candidate-card__party--{tone}")>{party}</p>
                <p class="candidate-card__description">{description}</p>
                <button
                    class=format!("btn candidate-card__talk candidate-card__talk--{tone}")
                    class:candidate-card__talk--selected=move || selected.get()
                    on:click=move |_| on_select.run(candidate.clone())
                >
                    {move || if selected.get() { "Seleccionado" } else { "Conversar" }}
                </button>
                <span class=format!("candidate-card__badge candidate-card__badge--{tone}")>{badge}</span>
            </div>
        </div>
    }
}
