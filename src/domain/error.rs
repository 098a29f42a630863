//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Validation errors are user-correctable input problems.
/// The display text is shown verbatim to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a binary number")]
    EmptyInput,

    #[error("Invalid binary number! Please enter only 0s and 1s.")]
    InvalidCharacter {
        /// First character outside {0, 1}
        found: char,
        /// Character position in the trimmed input (0-based)
        position: usize,
    },
}

impl ValidationError {
    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "empty input",
            ValidationError::InvalidCharacter { .. } => "invalid character",
        }
    }
}
