//! Problem list state for the problems page.

#[cfg(test)]
#[path = "problems_test.rs"]
mod problems_test;

use crate::net::error::ApiError;
use crate::net::types::Problem;
use crate::state::page::PageGate;
use crate::util::responses::{CandidateResponse, responses_for};

/// Page-level message shown when the problem index cannot be loaded.
pub const PROBLEMS_LOAD_ERROR: &str = "Error al cargar los problemas. Por favor, inténtalo de nuevo.";

#[derive(Clone, Debug, Default)]
pub struct ProblemsState {
    pub items: Vec<Problem>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_id: Option<String>,
}

impl ProblemsState {
    /// Mark a (re)load as in flight and clear any previous page error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of `api::fetch_problems`, selecting the first problem
    /// on success.
    pub fn finish_load(&mut self, result: Result<Vec<Problem>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.selected_id = items.first().map(|p| p.id.clone());
                self.items = items;
            }
            Err(_) => self.error = Some(PROBLEMS_LOAD_ERROR.to_owned()),
        }
    }

    /// Screen to show: spinner, page error, or the loaded list.
    pub fn gate(&self) -> PageGate {
        PageGate::of(self.loading, self.error.as_deref())
    }

    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_owned());
    }

    pub fn selected(&self) -> Option<&Problem> {
        let id = self.selected_id.as_deref()?;
        self.items.iter().find(|p| p.id == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    /// Canned candidate responses for the selected problem's title.
    pub fn selected_responses(&self) -> &'static [CandidateResponse] {
        self.selected().map(|p| responses_for(&p.title)).unwrap_or_default()
    }
}
