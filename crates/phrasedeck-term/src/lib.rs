//! Terminal user interface for the phrasedeck board.
//!
//! This crate renders the compose form and the phrase list in the terminal
//! and forwards user intents to the state store in `phrasedeck-core`. It owns
//! all the plumbing the pure core deliberately avoids: the event loop,
//! keyboard handling, configuration, and logging.

pub mod application;
pub mod configuration;
pub mod domain;

pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::Event;
pub use domain::services::AppState;
