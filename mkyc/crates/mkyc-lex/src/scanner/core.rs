//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its constructors and the
//! `next_token` dispatch.

use std::borrow::Cow;
use std::iter::FusedIterator;

use log::{debug, trace};
use mkyc_util::{DiagnosticBuilder, Handler, Span};

use crate::classify::{is_digit, is_letter, is_whitespace};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Scanner for the Monkey language.
///
/// Pull-based: every call to [`Scanner::next_token`] yields exactly one
/// token. Once the input is exhausted it keeps yielding `EndOfInput`.
///
/// # Example
///
/// ```
/// use mkyc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("let five = 5;");
/// let token = scanner.next_token();
/// assert_eq!(token.kind(), TokenKind::Let);
/// assert_eq!((token.line(), token.column()), (1, 1));
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Collector for lexical diagnostics.
    handler: Handler,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column number where the current token starts (1-based).
    pub(crate) token_start_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over a borrowed string.
    pub fn new(source: &'a str) -> Self {
        Self::with_handler(source, Handler::new())
    }

    /// Creates a scanner that reports diagnostics into `handler`.
    ///
    /// Use [`Handler::new_panicking`] to make every lexical error abort.
    pub fn with_handler(source: impl Into<Cow<'a, str>>, handler: Handler) -> Self {
        let cursor = Cursor::new(source);
        Self {
            token_start: cursor.position(),
            token_start_line: cursor.line(),
            token_start_column: cursor.column(),
            cursor,
            handler,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the current character. Never
    /// fails: characters without a rule become `Illegal` tokens.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(c) = self.cursor.current() else {
            return Token::eof(self.token_start_line, self.token_start_column);
        };

        let token = match c {
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '>' => self.lex_greater(),
            '<' => self.lex_less(),
            ';' => self.lex_single(TokenKind::Semicolon),
            '(' => self.lex_single(TokenKind::LParen),
            ')' => self.lex_single(TokenKind::RParen),
            ',' => self.lex_single(TokenKind::Comma),
            '{' => self.lex_single(TokenKind::LBrace),
            '}' => self.lex_single(TokenKind::RBrace),
            '+' => self.lex_single(TokenKind::Plus),
            '-' => self.lex_single(TokenKind::Minus),
            '*' => self.lex_single(TokenKind::Asterisk),
            '/' => self.lex_slash(),
            c if is_letter(c) => self.lex_identifier(),
            c if is_digit(c) => self.lex_number(),
            c => {
                self.cursor.advance();
                self.report(LexError::UnexpectedChar(c));
                self.make_token(TokenKind::Illegal)
            },
        };

        trace!("{}", token);
        token
    }

    /// Builds a token of `kind` whose literal runs from the token start to
    /// the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Consumes one character and builds a token of `kind` from it.
    fn lex_single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current().is_some_and(is_whitespace) {
            self.cursor.advance();
        }
    }

    /// Records `error` against the current token in the handler.
    ///
    /// Only the span is kept; [`mkyc_util::Diagnostic::render`] recovers the
    /// source line from [`Scanner::source`] when it is needed.
    pub(crate) fn report(&self, error: LexError) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        debug!("{} at {}", error, span);

        DiagnosticBuilder::new(error.level(), error.to_string())
            .code(error.code())
            .span(span)
            .emit(&self.handler);
    }

    /// Returns the diagnostics collected so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Consumes the scanner, returning its diagnostic handler.
    pub fn into_handler(self) -> Handler {
        self.handler
    }

    /// Returns the line of the cursor (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the column of the cursor.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the text being scanned, for rendering diagnostics.
    pub fn source(&self) -> &str {
        self.cursor.source()
    }
}

impl Scanner<'static> {
    /// Creates a scanner over lines joined with `\n`.
    ///
    /// Line numbers come out as if the lines had been one string.
    ///
    /// # Example
    ///
    /// ```
    /// use mkyc_lex::{Scanner, TokenKind};
    ///
    /// let mut scanner = Scanner::from_lines(["let x = 1;", "x"]);
    /// let last = scanner.by_ref().last().unwrap();
    /// assert_eq!(last.kind(), TokenKind::Identifier);
    /// assert_eq!((last.line(), last.column()), (2, 1));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self::with_handler(text, Handler::new())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `EndOfInput`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans `source` completely, returning every token including the final
/// `EndOfInput`.
///
/// # Example
///
/// ```
/// use mkyc_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("10 == 10").iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Integer, TokenKind::Equal, TokenKind::Integer, TokenKind::EndOfInput]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
