use super::*;

// =============================================================
// Helpers
// =============================================================

fn candidate(id: &str, name: &str) -> Candidate {
    Candidate {
        id: id.to_owned(),
        name: name.to_owned(),
        party: "Partido Rojo".to_owned(),
        image: "/placeholder.svg".to_owned(),
        description: "Abogado".to_owned(),
    }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn candidates_state_defaults() {
    let s = CandidatesState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
    assert!(s.selected().is_none());
}

#[test]
fn successful_load_selects_first_candidate() {
    let mut s = CandidatesState::default();
    s.begin_load();
    assert!(s.loading);
    s.finish_load(Ok(vec![candidate("4", "Carlos López"), candidate("9", "Laura Sánchez")]));
    assert!(!s.loading);
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.selected().map(|c| c.name.as_str()), Some("Carlos López"));
}

#[test]
fn failed_load_sets_error_and_does_not_populate() {
    let mut s = CandidatesState::default();
    s.begin_load();
    s.finish_load(Err(ApiError::MissingKeys));
    assert!(!s.loading);
    assert!(s.items.is_empty());
    assert!(s.selected_id.is_none());
    assert_eq!(s.error.as_deref(), Some(CANDIDATES_LOAD_ERROR));
}

#[test]
fn retry_clears_previous_error() {
    let mut s = CandidatesState::default();
    s.finish_load(Err(ApiError::MissingKeys));
    s.begin_load();
    assert!(s.error.is_none());
    s.finish_load(Ok(vec![candidate("1", "Ana García")]));
    assert!(s.error.is_none());
    assert_eq!(s.items.len(), 1);
}

#[test]
fn empty_load_clears_selection() {
    let mut s = CandidatesState::default();
    s.finish_load(Ok(vec![candidate("1", "Ana García")]));
    s.finish_load(Ok(Vec::new()));
    assert!(s.selected_id.is_none());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_switches_candidate() {
    let mut s = CandidatesState::default();
    s.finish_load(Ok(vec![candidate("1", "Ana García"), candidate("2", "José Martínez")]));
    s.select("2");
    assert!(s.is_selected("2"));
    assert!(!s.is_selected("1"));
    assert_eq!(s.selected().map(|c| c.id.as_str()), Some("2"));
}

#[test]
fn selected_is_none_for_unknown_id() {
    let mut s = CandidatesState::default();
    s.finish_load(Ok(vec![candidate("1", "Ana García")]));
    s.select("missing");
    assert!(s.selected().is_none());
}

#[test]
fn gate_follows_load_lifecycle() {
    let mut s = CandidatesState::default();
    s.begin_load();
    assert_eq!(s.gate(), PageGate::Loading);
    s.finish_load(Err(ApiError::MissingKeys));
    assert_eq!(s.gate(), PageGate::Failed(CANDIDATES_LOAD_ERROR.to_owned()));
    s.begin_load();
    s.finish_load(Ok(vec![candidate("1", "Ana García")]));
    assert_eq!(s.gate(), PageGate::Ready);
}

#[test]
fn selection_leaves_gate_unchanged() {
    let mut s = CandidatesState::default();
    s.finish_load(Ok(vec![candidate("1", "Ana García"), candidate("2", "José Martínez")]));
    let before = s.gate();
    s.select("2");
    assert_eq!(s.gate(), before);
    assert_eq!(s.gate(), PageGate::Ready);
}
