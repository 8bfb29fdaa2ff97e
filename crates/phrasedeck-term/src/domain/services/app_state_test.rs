use super::*;
use crate::domain::models::Action;

const MINIMUM: usize = 20;
const FIRST: &str = "This is a long enough phrase";
const SECOND: &str = "Another perfectly valid phrase";

fn state_with_phrases(texts: &[&str]) -> AppState {
    let mut state = AppState::new(MINIMUM);
    for text in texts {
        assert!(state.dispatch(Action::AddPhrase(text.to_string())));
    }
    return state;
}

#[test]
fn test_dispatch_accepts_valid_phrase() {
    let mut state = AppState::new(MINIMUM);

    assert!(state.dispatch(Action::AddPhrase(FIRST.to_string())));
    assert_eq!(state.phrases.texts(), vec![FIRST]);
    assert_eq!(state.warning, None);
}

#[test]
fn test_dispatch_records_rejection_and_keeps_board() {
    let mut state = state_with_phrases(&[FIRST]);

    assert!(!state.dispatch(Action::AddPhrase("short".to_string())));
    assert_eq!(state.phrases.texts(), vec![FIRST]);
    assert!(matches!(
        state.warning,
        Some(ValidationError::TooShort { length: 5, .. })
    ));
}

#[test]
fn test_dispatch_rejects_duplicates() {
    let mut state = state_with_phrases(&[FIRST]);

    assert!(!state.dispatch(Action::AddPhrase(FIRST.to_string())));
    assert!(matches!(state.warning, Some(ValidationError::Duplicate(_))));
}

#[test]
fn test_accepted_dispatch_clears_previous_warning() {
    let mut state = AppState::new(MINIMUM);
    state.dispatch(Action::AddPhrase("short".to_string()));
    assert!(state.warning.is_some());

    state.dispatch(Action::AddPhrase(FIRST.to_string()));
    assert_eq!(state.warning, None);
}

#[test]
fn test_delete_selected_removes_phrase_under_cursor() {
    let mut state = state_with_phrases(&[FIRST, SECOND]);
    state.selected = 0;

    assert!(state.delete_selected());
    assert_eq!(state.phrases.texts(), vec![SECOND]);
}

#[test]
fn test_delete_selected_on_empty_board_is_a_noop() {
    let mut state = AppState::new(MINIMUM);

    assert!(!state.delete_selected());
}

#[test]
fn test_selection_is_clamped_after_deleting_last_phrase() {
    let mut state = state_with_phrases(&[FIRST, SECOND]);
    state.selected = 1;

    assert!(state.delete_selected());
    assert_eq!(state.selected, 0);
    assert_eq!(state.selected_phrase().map(|p| p.text.as_str()), Some(FIRST));
}

#[test]
fn test_selection_stays_within_bounds() {
    let mut state = state_with_phrases(&[FIRST, SECOND]);

    state.select_up();
    assert_eq!(state.selected, 0);
    state.select_up();
    assert_eq!(state.selected, 0);

    state.select_down();
    assert_eq!(state.selected, 1);
    state.select_down();
    assert_eq!(state.selected, 1);
}

#[test]
fn test_custom_minimum_is_honored() {
    let mut state = AppState::new(5);

    assert!(state.dispatch(Action::AddPhrase("hello".to_string())));
    assert!(!state.dispatch(Action::AddPhrase("hi".to_string())));
}

#[test]
fn test_clear_warning() {
    let mut state = AppState::new(MINIMUM);
    state.dispatch(Action::AddPhrase("short".to_string()));

    state.clear_warning();
    assert_eq!(state.warning, None);
}
