//! Lexical conditions worth reporting.
//!
//! None of these stop the scanner: an unexpected character still becomes an
//! `Illegal` token and an unterminated block comment still becomes a
//! `BlockComment` token. They are recorded as diagnostics on the side.

use mkyc_util::{DiagnosticCode, Level};
use thiserror::Error;

/// A recoverable lexical problem.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside the language's alphabet.
    #[error("unexpected character '{}'", .0.escape_default())]
    UnexpectedChar(char),

    /// A `/*` with no matching `*/` before the end of input.
    #[error("block comment is never closed")]
    UnterminatedBlockComment,
}

impl LexError {
    /// The diagnostic code reported for this condition.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedBlockComment => DiagnosticCode::W_LEXER_UNTERMINATED_COMMENT,
        }
    }

    /// The severity reported for this condition.
    pub fn level(&self) -> Level {
        match self {
            LexError::UnexpectedChar(_) => Level::Error,
            LexError::UnterminatedBlockComment => Level::Warning,
        }
    }
}
