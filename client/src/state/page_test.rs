use super::*;

#[test]
fn loading_wins_over_error() {
    assert_eq!(PageGate::of(true, Some("fallo")), PageGate::Loading);
    assert_eq!(PageGate::of(true, None), PageGate::Loading);
}

#[test]
fn error_without_loading_is_failed() {
    assert_eq!(PageGate::of(false, Some("fallo")), PageGate::Failed("fallo".to_owned()));
}

#[test]
fn idle_without_error_is_ready() {
    assert_eq!(PageGate::of(false, None), PageGate::Ready);
}
