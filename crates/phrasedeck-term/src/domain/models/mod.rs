mod event;

pub use event::Event;
// The state-store types flow through the UI everywhere; re-exporting them
// keeps the rest of the crate importing from one place.
pub use phrasedeck_core::{Action, Phrase, PhraseList, Transition, ValidationError};
