//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Lexical problems never interrupt scanning; instead they are recorded as
//! [`Diagnostic`] values in a [`Handler`] that callers may inspect afterwards.
//! A diagnostic stores only its location, never source text, so the cost of
//! reporting does not depend on line length. [`Diagnostic::render`] brings
//! the source line back when a caller wants to show it.
//!
//! # Examples
//!
//! ```
//! use mkyc_util::diagnostic::{DiagnosticBuilder, Handler, Level};
//! use mkyc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::new(Level::Error, "unexpected character '#'")
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::Span;
use std::cell::{Cell, RefCell};
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use mkyc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A problem the consumer will most likely treat as fatal
    Error,
    /// A problem that leaves the token stream usable
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Renders the diagnostic with the source line it points at.
    ///
    /// `source` must be the text the diagnostic was reported against; a
    /// span that does not fit it is rendered without a snippet.
    ///
    /// ```text
    /// error[E1001]: unexpected character '@'
    ///  --> 1:9
    ///   1 | let x = @;
    ///     |         ^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = self.to_string();
        if self.span != Span::DUMMY {
            if let Some(snippet) = SourceSnippet::from_source(source, self.span) {
                out.push('\n');
                out.push_str(&snippet.format());
            }
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the headline and location, without source text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if self.span != Span::DUMMY {
            write!(f, "\n --> {}", self.span)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics behind shared references so that it
/// can be threaded through a scanner without borrowing it mutably. It can
/// be configured to panic on errors for testing.
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: Cell<bool>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that panics on errors (for testing)
    ///
    /// Warnings are still collected.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use mkyc_util::diagnostic::{DiagnosticBuilder, Handler, Level};
    ///
    /// let handler = Handler::new_panicking();
    /// DiagnosticBuilder::new(Level::Error, "fatal").emit(&handler);
    /// ```
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: Cell::new(true),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error.get() && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Consume the handler, returning its diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}
