//! Comment lexing.
//!
//! Comments are returned as tokens rather than skipped; their literal is the
//! interior text without the `//`, `/*` or `*/` markers.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a line comment, from `//` to end of line.
    ///
    /// Called with the cursor on the second `/`. The newline is left for the
    /// whitespace skipper. The reported column is the end column minus the
    /// literal length plus one, where the end column belongs to the last
    /// character consumed before the terminator.
    pub(crate) fn lex_line_comment(&mut self) -> Token {
        let mut end_column = self.cursor.column();
        self.cursor.advance();

        let start = self.cursor.position();
        while let Some(c) = self.cursor.current() {
            if c == '\n' {
                break;
            }
            end_column = self.cursor.column();
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        let length = text.chars().count() as u32;
        Token::new(
            TokenKind::LineComment,
            text,
            self.token_start_line,
            end_column + 1 - length,
        )
    }

    /// Lexes a block comment, from `/*` to the matching `*/`.
    ///
    /// Called with the cursor on the `*`. Block comments do not nest: the
    /// first `*/` closes the comment. Without one, the rest of the input
    /// becomes the literal and a warning is reported.
    pub(crate) fn lex_block_comment(&mut self) -> Token {
        self.cursor.advance();
        let start = self.cursor.position();

        let text = loop {
            match self.cursor.current() {
                None => {
                    self.report(LexError::UnterminatedBlockComment);
                    break self.cursor.slice_from(start);
                },
                Some('*') if self.cursor.peek() == Some('/') => {
                    let end = self.cursor.position();
                    self.cursor.advance();
                    self.cursor.advance();
                    break self.cursor.slice(start, end);
                },
                Some(_) => self.cursor.advance(),
            }
        };

        Token::new(
            TokenKind::BlockComment,
            text,
            self.token_start_line,
            self.token_start_column,
        )
    }
}
