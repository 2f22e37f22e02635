//! mkyc-lex - Lexical Scanner for the Monkey Programming Language
//!
//! This crate turns Monkey source text into a linear sequence of classified
//! tokens, each annotated with the line and column it came from. It is the
//! front end of the toolchain: a parser pulls tokens one at a time.
//!
//! # Example Usage
//!
//! ```
//! use mkyc_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//!
//! // Get tokens one at a time
//! let token = scanner.next_token();
//! assert_eq!(token.kind(), TokenKind::Let);
//! assert_eq!(token.literal(), "let");
//!
//! // Or iterate over the rest
//! for token in &mut scanner {
//!     println!("{}", token);
//! }
//!
//! // End of input repeats once reached
//! assert!(scanner.next_token().is_eof());
//! assert!(scanner.next_token().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds, tokens and the keyword table
//! - [`scanner`] - the scanner itself
//! - [`cursor`] - character cursor with line/column bookkeeping
//! - [`classify`] - character classification predicates
//! - [`error`] - lexical problems reported as diagnostics
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `0`, `42`, `007` (kept as written)
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `!`
//! - **Assignment**: `=`
//!
//! ## Delimiters
//!
//! `(`, `)`, `{`, `}`, `,`, `;`
//!
//! ## Comments
//!
//! `// line` and `/* block */` come back as tokens whose literal is the
//! text between the markers.
//!
//! ## Special
//!
//! - **EOF**: end of input marker
//! - **Illegal**: unrecognized characters, also reported to the scanner's
//!   [`mkyc_util::Handler`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use scanner::{tokenize, Scanner};
pub use token::{keyword_from_ident, lookup_ident, Token, TokenKind};

// Tokens cross threads freely; a scanner may move but its handler is not
// shareable.
static_assertions::assert_impl_all!(Token: Send, Sync, Clone);
static_assertions::assert_impl_all!(Scanner<'static>: Send);
static_assertions::assert_not_impl_any!(Scanner<'static>: Sync);
