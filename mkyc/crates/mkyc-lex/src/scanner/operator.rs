//! Operator lexing.
//!
//! The four characters `=`, `!`, `>` and `<` pair with a following `=`;
//! `/` may open a comment. Each token carries the position of its first
//! character and, for two-character operators, both characters as literal.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes assign or equality.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.lex_with_equals(TokenKind::Assign, TokenKind::Equal)
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.lex_with_equals(TokenKind::Not, TokenKind::NotEqual)
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.lex_with_equals(TokenKind::GreaterThan, TokenKind::GreaterEqual)
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        self.lex_with_equals(TokenKind::LessThan, TokenKind::LessEqual)
    }

    /// Lexes slash or a comment.
    ///
    /// Handles: `/`, `// ...`, `/* ... */`
    pub(crate) fn lex_slash(&mut self) -> Token {
        self.cursor.advance();
        match self.cursor.current() {
            Some('/') => self.lex_line_comment(),
            Some('*') => self.lex_block_comment(),
            _ => self.make_token(TokenKind::Slash),
        }
    }

    /// Consumes the current character, then an optional `=`.
    fn lex_with_equals(&mut self, single: TokenKind, paired: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(paired)
        } else {
            self.make_token(single)
        }
    }
}
