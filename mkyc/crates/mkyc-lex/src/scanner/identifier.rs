//! Identifier and keyword lexing.

use crate::classify::is_ident_char;
use crate::token::{lookup_ident, Token};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Reads the maximal run of identifier characters starting at the
    /// current letter, then classifies the whole spelling through the
    /// keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while self.cursor.current().is_some_and(is_ident_char) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        Token::new(
            lookup_ident(text),
            text,
            self.token_start_line,
            self.token_start_column,
        )
    }
}
