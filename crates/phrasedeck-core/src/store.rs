//! The board and its transition function.

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

/// Minimum phrase length accepted by [`transition`].
pub const MIN_PHRASE_CHARS: usize = 20;

/// A phrase held on the board. Equality is by textual value; a phrase has no
/// identity beyond its text.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Phrase {
    pub text: String,
}

impl Phrase {
    pub fn new(text: &str) -> Phrase {
        return Phrase {
            text: text.to_string(),
        };
    }

    pub fn chars_len(&self) -> usize {
        return self.text.chars().count();
    }
}

/// An ordered, insertion-order-preserving sequence of phrases.
///
/// The container itself is dumb: the board rules (minimum length, no
/// duplicates) are enforced by [`transition`], not by the list. Lists built
/// through the reducer never contain duplicates, so a delete removes at most
/// one element in practice, though it filters all matches.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PhraseList {
    phrases: Vec<Phrase>,
}

impl PhraseList {
    pub fn new() -> PhraseList {
        return PhraseList::default();
    }

    pub fn from_texts(texts: &[&str]) -> PhraseList {
        return PhraseList {
            phrases: texts.iter().map(|text| Phrase::new(text)).collect(),
        };
    }

    pub fn contains(&self, text: &str) -> bool {
        return self.phrases.iter().any(|phrase| phrase.text == text);
    }

    pub fn get(&self, index: usize) -> Option<&Phrase> {
        return self.phrases.get(index);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Phrase> {
        return self.phrases.iter();
    }

    pub fn texts(&self) -> Vec<&str> {
        return self.phrases.iter().map(|phrase| phrase.text.as_str()).collect();
    }

    pub fn len(&self) -> usize {
        return self.phrases.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.phrases.is_empty();
    }

    fn appended(&self, phrase: Phrase) -> PhraseList {
        let mut phrases = self.phrases.clone();
        phrases.push(phrase);
        return PhraseList { phrases };
    }

    fn without(&self, text: &str) -> PhraseList {
        return PhraseList {
            phrases: self
                .phrases
                .iter()
                .filter(|phrase| phrase.text != text)
                .cloned()
                .collect(),
        };
    }
}

/// A state-mutation request dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddPhrase(String),
    DeletePhrase(String),
}

/// The result of applying an [`Action`] to a board: the next list, plus the
/// validation failure when the action was rejected. A rejected transition
/// carries a list equal to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub list: PhraseList,
    pub rejection: Option<ValidationError>,
}

impl Transition {
    fn accepted(list: PhraseList) -> Transition {
        return Transition {
            list,
            rejection: None,
        };
    }

    fn rejected(list: PhraseList, rejection: ValidationError) -> Transition {
        return Transition {
            list,
            rejection: Some(rejection),
        };
    }
}

/// Applies `action` to `current` with the default minimum length.
pub fn transition(current: &PhraseList, action: Action) -> Transition {
    return transition_with_minimum(current, action, MIN_PHRASE_CHARS);
}

/// Applies `action` to `current`, validating adds against an explicit
/// `minimum`. Pure: `current` is never mutated.
pub fn transition_with_minimum(
    current: &PhraseList,
    action: Action,
    minimum: usize,
) -> Transition {
    match action {
        Action::AddPhrase(candidate) => {
            let length = candidate.chars().count();
            if length < minimum {
                return Transition::rejected(
                    current.clone(),
                    ValidationError::TooShort { length, minimum },
                );
            }

            if current.contains(&candidate) {
                return Transition::rejected(current.clone(), ValidationError::Duplicate(candidate));
            }

            return Transition::accepted(current.appended(Phrase::new(&candidate)));
        }
        Action::DeletePhrase(target) => {
            return Transition::accepted(current.without(&target));
        }
    }
}
