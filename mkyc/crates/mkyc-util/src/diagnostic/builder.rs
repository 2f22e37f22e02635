//! Diagnostic construction and source rendering.
//!
//! [`DiagnosticBuilder`] assembles a [`Diagnostic`] at report time from
//! nothing but a level, a message, a code and a span. [`SourceSnippet`] is
//! cut out of the source text later, only when a diagnostic is rendered.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// The source line a diagnostic points at, with the highlighted columns.
///
/// # Examples
///
/// ```
/// use mkyc_util::diagnostic::SourceSnippet;
/// use mkyc_util::span::Span;
///
/// let source = "let a = 1;\nlet x = @;";
/// let snippet = SourceSnippet::from_source(source, Span::new(19, 20, 2, 9)).unwrap();
/// assert_eq!(snippet.line, "let x = @;");
/// assert_eq!(snippet.format(), "  2 | let x = @;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content, without its terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the highlight starts (1-based)
    pub start_column: usize,
    /// Column where the highlight ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Cuts the line containing `span` out of `source`.
    ///
    /// The highlight covers the part of the span on that line, at least one
    /// column wide. Returns `None` when the span does not fall on character
    /// boundaries of `source`.
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        let start = span.start;
        let line_start = source.get(..start)?.rfind('\n').map_or(0, |i| i + 1);
        let line_end = source
            .get(start..)?
            .find('\n')
            .map_or(source.len(), |i| start + i);
        let line = source[line_start..line_end].trim_end_matches('\r');

        let highlighted = source.get(start..span.end.clamp(start, line_end))?;
        let width = highlighted.trim_end_matches('\r').chars().count().max(1);
        let start_column = span.column as usize;

        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column: start_column + width,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its line number, followed by a
    /// caret line. Tabs before the highlight are repeated in the padding so
    /// the carets stay aligned.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let padding: String = self
            .line
            .chars()
            .take(self.start_column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let carets = "^".repeat(self.end_column.saturating_sub(self.start_column).max(1));

        format!(
            "{:>width$} | {}\n{:>width$} | {}{}",
            self.line_number, self.line, "", padding, carets
        )
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use mkyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Level};
/// use mkyc_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::new(Level::Error, "unexpected character '@'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(0, 1, 1, 1))
///     .emit(&handler);
/// assert!(handler.has_errors());
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
