//! Validation failures for phrase submissions.
//!
//! Both variants are non-fatal: the reducer returns the board unchanged and
//! hands the failure back to the caller, which is expected to inform the user
//! before accepting further input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("phrases shorter than {minimum} characters are not allowed ({length} typed)")]
    TooShort { length: usize, minimum: usize },
    #[error("duplicate phrases are not allowed")]
    Duplicate(String),
}
