//! Error types for the equation-group codec.

use thiserror::Error;

/// Result type alias for codec operations.
pub type EqnsResult<T> = Result<T, EqnsError>;

/// Top-level error type.
///
/// A single error kind originates in this crate: a decode step met a term
/// whose shape does not match what the equations encoder produces. It is
/// always fatal to the compilation of the enclosing definition and signals
/// corrupted input or a defect in a cooperating pass, never an ordinary
/// user-input problem. Callers report it as an internal-error diagnostic,
/// separate from type-checking errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EqnsError {
    /// Term shape violation detected while decoding an equations expression.
    #[error("ill-formed equations expression: {0}")]
    IllFormed(&'static str),
}

/// Raise the malformed-input signal at the exact point a decode step's
/// shape expectation fails.
pub(crate) fn ill_formed<T>(reason: &'static str) -> EqnsResult<T> {
    Err(EqnsError::IllFormed(reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EqnsError::IllFormed("expected an equations expression");
        assert!(err.to_string().contains("ill-formed"));
        assert!(err.to_string().contains("expected an equations expression"));
    }
}
