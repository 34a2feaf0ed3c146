//! Diagnostics for the Quill frontend.
//!
//! There is one error type, [`SyntaxError`], split into two kinds:
//! lexical (malformed input at the character level) and structural (a token
//! sequence that does not match the grammar). Both are fatal to the call that
//! produced them: there is no recovery, no partial result, and no warning
//! level.
//!
//! Internal invariant violations (a scan cursor that fails to advance, a token
//! the grammar guarantees but that is absent) are defects in this crate, not
//! user errors; those panic with an `INVARIANT:` message instead of returning.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A fatal frontend error.
///
/// Lexical errors carry the byte offset of the offending character so callers
/// can render a source-context report. Structural errors do not: tokens carry
/// no positions, so the message itself names the offending token and, where
/// useful, the expected alternative.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{kind}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub kind: ErrorKind,
    #[label("here")]
    pub at: Option<SourceSpan>,
}

impl SyntaxError {
    /// A character-level error at a byte offset in the source.
    pub fn lexical(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Lexical,
            at: Some((offset, 0).into()),
        }
    }

    /// A grammar-level error. No offset: the token shape carries no positions.
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Structural,
            at: None,
        }
    }
}

/// The two fatal error classes of the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or unrecognized input at the character level.
    Lexical,
    /// Token sequence does not match the grammar.
    Structural,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Structural => write!(f, "syntax error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = SyntaxError::lexical("unknown token '@'", 4);
        assert_eq!(err.to_string(), "lexical error: unknown token '@'");
        assert!(err.at.is_some());

        let err = SyntaxError::structural("unexpected end of input");
        assert_eq!(err.to_string(), "syntax error: unexpected end of input");
        assert!(err.at.is_none());
    }
}
