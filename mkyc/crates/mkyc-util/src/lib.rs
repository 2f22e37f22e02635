//! mkyc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the Monkey toolchain crates:
//!
//! - [`span`] - source locations (byte range plus line/column)
//! - [`diagnostic`] - diagnostic levels, codes, builder, the collecting
//!   [`Handler`] and source rendering
//! - [`FxHashMap`] - the fast, non-cryptographic hash map used for
//!   compiler tables
//!
//! # Example
//!
//! ```
//! use mkyc_util::{DiagnosticBuilder, Handler, Level, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::new(Level::Warning, "block comment is never closed")
//!     .span(Span::new(0, 7, 1, 1))
//!     .emit(&handler);
//! assert_eq!(handler.warning_count(), 1);
//!
//! let rendered = handler.diagnostics()[0].render("/* open");
//! assert!(rendered.ends_with("  1 | /* open\n    | ^^^^^^^"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::Span;

pub use rustc_hash::FxHashMap;
