//! Which screen a list page shows while its directory loads.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Outer screen of a list page. Selection changes never move between gates,
/// so a page keyed on this value keeps its list mounted while the user picks
/// items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageGate {
    Loading,
    Failed(String),
    Ready,
}

impl PageGate {
    pub fn of(loading: bool, error: Option<&str>) -> Self {
        if loading {
            return Self::Loading;
        }
        match error {
            Some(message) => Self::Failed(message.to_owned()),
            None => Self::Ready,
        }
    }
}
