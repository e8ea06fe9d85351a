//! Candidate list state for the home page.
//!
//! DESIGN
//! ======
//! The list is rebuilt on every mount and on retry. A failed load keeps the
//! previous items untouched and only records the page-level error.

#[cfg(test)]
#[path = "candidates_test.rs"]
mod candidates_test;

use crate::net::error::ApiError;
use crate::net::types::Candidate;
use crate::state::page::PageGate;

/// Page-level message shown when the candidate index cannot be loaded.
pub const CANDIDATES_LOAD_ERROR: &str = "Error al cargar los partidos. Por favor, inténtalo de nuevo.";

#[derive(Clone, Debug, Default)]
pub struct CandidatesState {
    pub items: Vec<Candidate>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_id: Option<String>,
}

impl CandidatesState {
    /// Mark a (re)load as in flight and clear any previous page error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of `api::fetch_candidates`.
    ///
    /// On success the first candidate becomes the selection.
    pub fn finish_load(&mut self, result: Result<Vec<Candidate>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.selected_id = items.first().map(|c| c.id.clone());
                self.items = items;
            }
            Err(_) => self.error = Some(CANDIDATES_LOAD_ERROR.to_owned()),
        }
    }

    /// Screen to show: spinner, page error, or the loaded list.
    pub fn gate(&self) -> PageGate {
        PageGate::of(self.loading, self.error.as_deref())
    }

    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_owned());
    }

    /// The currently selected candidate, if it is still in the list.
    pub fn selected(&self) -> Option<&Candidate> {
        let id = self.selected_id.as_deref()?;
        self.items.iter().find(|c| c.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}
