use phrasedeck_core::transition_with_minimum;

use crate::domain::models::Action;
use crate::domain::models::Phrase;
use crate::domain::models::PhraseList;
use crate::domain::models::ValidationError;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

/// The single owner of UI state. The phrase list is an explicit value here,
/// replaced wholesale on every accepted transition; nothing else in the
/// process holds board state.
pub struct AppState {
    pub phrases: PhraseList,
    pub selected: usize,
    pub warning: Option<ValidationError>,
    pub minimum: usize,
}

impl AppState {
    pub fn new(minimum: usize) -> AppState {
        return AppState {
            phrases: PhraseList::new(),
            selected: 0,
            warning: None,
            minimum,
        };
    }

    /// Runs one transition against the store. Returns true when the board
    /// changed, so the caller knows whether a submission was accepted.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let outcome = transition_with_minimum(&self.phrases, action, self.minimum);

        if let Some(rejection) = outcome.rejection {
            tracing::warn!(%rejection, "submission rejected");
            self.warning = Some(rejection);
            return false;
        }

        let changed = outcome.list != self.phrases;
        self.warning = None;
        self.phrases = outcome.list;
        self.clamp_selection();

        if changed {
            tracing::info!(phrases = self.phrases.len(), "board updated");
        }

        return changed;
    }

    pub fn selected_phrase(&self) -> Option<&Phrase> {
        return self.phrases.get(self.selected);
    }

    /// Removes the phrase under the cursor, if any.
    pub fn delete_selected(&mut self) -> bool {
        let target = match self.selected_phrase() {
            Some(phrase) => phrase.text.clone(),
            None => return false,
        };

        return self.dispatch(Action::DeletePhrase(target));
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.phrases.len() {
            self.selected += 1;
        }
    }

    /// The user has seen the warning; editing the compose field starts a new
    /// attempt.
    pub fn clear_warning(&mut self) {
        self.warning = None;
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.phrases.len() {
            self.selected = self.phrases.len().saturating_sub(1);
        }
    }
}
