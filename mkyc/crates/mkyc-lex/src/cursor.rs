//! Character cursor for traversing source code.
//!
//! The [`Cursor`] holds the whole input text and the scanner's position in
//! it: the offset of the current character, the offset of the next one, the
//! current character itself (`None` once the input is exhausted) and the
//! line/column of the current character.
//!
//! [`Cursor::advance`] is the only place where line and column change.

use std::borrow::Cow;

/// A cursor for traversing source code character by character.
///
/// # Position bookkeeping
///
/// Every step bumps the column by one. When a newline becomes the current
/// character, the line counter is incremented and the column reset to 0,
/// so the first character after it lands on column 1. Stepping off the last
/// character onto the end of input behaves as if a final newline had been
/// read: end of input sits on column 1 of the line after the text.
///
/// # Example
///
/// ```
/// use mkyc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.current(), Some('l'));
/// assert_eq!((cursor.line(), cursor.column()), (1, 1));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('e'));
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: Cow<'a, str>,

    /// Byte offset of the current character.
    position: usize,

    /// Byte offset of the next character to read.
    read_position: usize,

    /// The current character, `None` at end of input.
    current: Option<char>,

    /// Current line number (1-based).
    line: u32,

    /// Column of the current character (1-based, 0 for a newline).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    pub fn new(source: impl Into<Cow<'a, str>>) -> Self {
        let source = source.into();
        let current = char_at(&source, 0);
        let mut cursor = Self {
            read_position: current.map_or(0, char::len_utf8),
            source,
            position: 0,
            current,
            line: 1,
            column: 1,
        };
        if current == Some('\n') {
            cursor.line += 1;
            cursor.column = 0;
        }
        cursor
    }

    /// Returns the current character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the character after the current one without consuming
    /// anything.
    ///
    /// # Example
    ///
    /// ```
    /// use mkyc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("==");
    /// assert_eq!(cursor.peek(), Some('='));
    /// assert_eq!(Cursor::new("=").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        char_at(&self.source, self.read_position)
    }

    /// Moves to the next character, updating line and column.
    ///
    /// Does nothing once the end of input has been reached.
    pub fn advance(&mut self) {
        let Some(consumed) = self.current else {
            return;
        };

        self.position = self.read_position;
        self.current = char_at(&self.source, self.position);
        if let Some(c) = self.current {
            self.read_position += c.len_utf8();
        }
        self.column += 1;

        match self.current {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            },
            None if consumed != '\n' => {
                self.line += 1;
                self.column = 1;
            },
            _ => {},
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use mkyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current(), Some('>'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &str {
        &self.source[start..self.position]
    }

    /// Returns the source between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.source[start..end]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Decodes the character starting at byte `offset`.
#[inline]
fn char_at(source: &str, offset: usize) -> Option<char> {
    let b = *source.as_bytes().get(offset)?;

    // Fast path for ASCII (most common case)
    if b < 128 {
        return Some(b as char);
    }

    source[offset..].chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 42;");
        assert_eq!(cursor.current(), Some('l'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_position, 1);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.current(), None);
        assert_eq!((cursor.position(), cursor.read_position), (0, 0));
        assert_eq!((cursor.line(), cursor.column()), (1, 1));

        cursor.advance();
        assert_eq!(cursor.current(), None);
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.column(), 2);
        cursor.advance();
        assert_eq!(cursor.current(), Some('c'));
        assert_eq!(cursor.column(), 3);
        cursor.advance();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_offsets_invariant() {
        let mut cursor = Cursor::new("ab\ncd");
        while cursor.current().is_some() {
            assert!(cursor.position() < cursor.read_position);
            cursor.advance();
        }
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.read_position, 5);
    }

    #[test]
    fn test_newline_resets_column() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance(); // 'b'
        cursor.advance(); // '\n'
        assert_eq!(cursor.current(), Some('\n'));
        assert_eq!((cursor.line(), cursor.column()), (2, 0));
        cursor.advance(); // 'c'
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.advance(); // 'd'
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn test_leading_newline() {
        let mut cursor = Cursor::new("\nx");
        assert_eq!((cursor.line(), cursor.column()), (2, 0));
        cursor.advance();
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_end_of_input_starts_next_line() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), None);
        assert_eq!((cursor.line(), cursor.column()), (2, 1));

        // Stays put once exhausted.
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_end_of_input_after_trailing_newline() {
        let mut cursor = Cursor::new("a\n");
        cursor.advance(); // '\n'
        cursor.advance(); // end
        assert_eq!(cursor.current(), None);
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.current(), Some('α'));
        assert_eq!(cursor.read_position, 2);
        cursor.advance();
        assert_eq!(cursor.current(), Some('β'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_nul_is_a_character() {
        let mut cursor = Cursor::new("\0a");
        assert_eq!(cursor.current(), Some('\0'));
        cursor.advance();
        assert_eq!(cursor.current(), Some('a'));
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("=>");
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.match_char('>'));
        assert!(!cursor.match_char('>'));
    }

    #[test]
    fn test_slices() {
        let mut cursor = Cursor::new("let x");
        let start = cursor.position();
        for _ in 0..3 {
            cursor.advance();
        }
        assert_eq!(cursor.slice_from(start), "let");
        assert_eq!(cursor.slice(4, 5), "x");
        assert_eq!(cursor.source(), "let x");
    }

    #[test]
    fn test_owned_source() {
        let cursor = Cursor::new(String::from("x"));
        assert_eq!(cursor.current(), Some('x'));
    }
}
