//! Core error types for tunescout-core.
//!
//! Uses `thiserror` for structured, matchable error variants. Every failure
//! the domain layer can produce is a rejection of user input; provider-side
//! failures never reach this crate.

use thiserror::Error;

/// Core errors produced by the tunescout-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// User-supplied input could not be turned into a usable query.
    ///
    /// `input` is the original, unmodified string.
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },
}

impl CoreError {
    pub(crate) fn invalid_input(input: &str, reason: &str) -> Self {
        CoreError::InvalidInput {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display_carries_original() {
        let err = CoreError::invalid_input("1234", "no name found");
        assert_eq!(err.to_string(), "invalid input '1234': no name found");
    }
}
