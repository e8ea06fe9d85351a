//! Party-driven colour classes and badge labels.

#[cfg(test)]
#[path = "party_test.rs"]
mod party_test;

/// Colour family used for a party's cards, badges, and buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyTone {
    Green,
    Red,
    Yellow,
    Neutral,
}

impl PartyTone {
    pub fn of(party: &str) -> Self {
        match party {
            "Partido Verde" => Self::Green,
            "Partido Rojo" => Self::Red,
            "Partido Amarillo" => Self::Yellow,
            _ => Self::Neutral,
        }
    }

    /// BEM modifier appended to tone-aware classes, e.g. `card--green`.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Neutral => "neutral",
        }
    }
}

/// Short badge text: the party's second word, or the whole name.
pub fn badge_label(party: &str) -> &str {
    if party.is_empty() {
        return "Sin partido";
    }
    party.split(' ').nth(1).filter(|word| !word.is_empty()).unwrap_or(party)
}
