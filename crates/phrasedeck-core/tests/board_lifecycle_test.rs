//! Walks a board through a full session the way the UI drives it: start
//! empty, collect a few phrases with some rejected attempts along the way,
//! then remove them again.

use phrasedeck_core::{transition, Action, PhraseList, ValidationError};

#[test]
fn test_full_session_lifecycle() {
    let board = PhraseList::new();
    assert!(board.is_empty());

    // First submission is long enough and lands on the board.
    let outcome = transition(
        &board,
        Action::AddPhrase("This is a long enough phrase".to_string()),
    );
    assert_eq!(outcome.rejection, None);
    let board = outcome.list;
    assert_eq!(board.texts(), vec!["This is a long enough phrase"]);

    // A short attempt bounces without touching the board.
    let outcome = transition(&board, Action::AddPhrase("too short".to_string()));
    assert!(matches!(
        outcome.rejection,
        Some(ValidationError::TooShort { length: 9, .. })
    ));
    assert_eq!(outcome.list, board);

    // Submitting the same phrase again bounces as a duplicate.
    let outcome = transition(
        &board,
        Action::AddPhrase("This is a long enough phrase".to_string()),
    );
    assert!(matches!(
        outcome.rejection,
        Some(ValidationError::Duplicate(_))
    ));
    assert_eq!(outcome.list, board);

    // A second distinct phrase is appended after the first.
    let outcome = transition(
        &board,
        Action::AddPhrase("Completely different wording here".to_string()),
    );
    assert_eq!(outcome.rejection, None);
    let board = outcome.list;
    assert_eq!(
        board.texts(),
        vec![
            "This is a long enough phrase",
            "Completely different wording here",
        ]
    );

    // Deleting the first leaves the second in place.
    let board = transition(
        &board,
        Action::DeletePhrase("This is a long enough phrase".to_string()),
    )
    .list;
    assert_eq!(board.texts(), vec!["Completely different wording here"]);

    // Deleting it again is idempotent.
    let board = transition(
        &board,
        Action::DeletePhrase("This is a long enough phrase".to_string()),
    )
    .list;
    assert_eq!(board.texts(), vec!["Completely different wording here"]);

    let board = transition(
        &board,
        Action::DeletePhrase("Completely different wording here".to_string()),
    )
    .list;
    assert!(board.is_empty());
}

#[test]
fn test_rejection_messages_are_user_facing() {
    let too_short = ValidationError::TooShort {
        length: 5,
        minimum: 20,
    };
    assert_eq!(
        too_short.to_string(),
        "phrases shorter than 20 characters are not allowed (5 typed)"
    );

    let duplicate = ValidationError::Duplicate("whatever".to_string());
    assert_eq!(duplicate.to_string(), "duplicate phrases are not allowed");
}
