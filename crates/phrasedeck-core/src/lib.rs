//! State store for the phrasedeck board.
//!
//! This crate holds the entire business logic of the application: an ordered,
//! duplicate-free list of phrases and a pure transition function that applies
//! add and delete actions to it. Validation failures are returned as data, so
//! any presentation layer can surface them however it likes. There is no I/O
//! and no shared mutable state here.

pub mod errors;
pub mod store;

pub use errors::ValidationError;
pub use store::{
    transition, transition_with_minimum, Action, Phrase, PhraseList, Transition, MIN_PHRASE_CHARS,
};
