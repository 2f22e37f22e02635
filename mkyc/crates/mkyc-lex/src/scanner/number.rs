//! Integer literal lexing.
//!
//! Only plain decimal digit runs exist in the language; there is no sign,
//! radix prefix or fractional part.

use crate::classify::is_digit;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes an integer literal.
    ///
    /// The literal is the exact digit string, leading zeros included; the
    /// value is left for the consumer to interpret.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current().is_some_and(is_digit) {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Integer)
    }
}
