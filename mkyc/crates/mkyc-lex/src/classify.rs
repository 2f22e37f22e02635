//! Character classification for the Monkey scanner.
//!
//! The alphabet is deliberately small: identifiers and integers are built
//! from ASCII letters, digits and underscore only. Every other character is
//! either punctuation the scanner knows, whitespace, or illegal.

/// Checks if a character may start an identifier.
///
/// Only ASCII letters qualify; an underscore may appear inside an
/// identifier but cannot begin one.
///
/// # Example
///
/// ```
/// use mkyc_lex::classify::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('α'));
/// assert!(!is_letter('1'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use mkyc_lex::classify::is_ident_char;
///
/// assert!(is_ident_char('a'));
/// assert!(is_ident_char('_'));
/// assert!(is_ident_char('9'));
/// assert!(!is_ident_char('-'));
/// ```
#[inline]
pub fn is_ident_char(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

/// Checks if a character is skipped between tokens.
///
/// Only space, tab, carriage return and line feed count; other Unicode
/// whitespace is illegal input.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(is_letter(c), "{c:?} should be a letter");
            assert!(is_ident_char(c));
        }
        assert!(!is_letter('é'));
        assert!(!is_letter(' '));
    }

    #[test]
    fn test_digits() {
        for c in '0'..='9' {
            assert!(is_digit(c));
            assert!(!is_letter(c));
            assert!(is_ident_char(c));
        }
        assert!(!is_digit('٣'));
    }

    #[test]
    fn test_underscore_continues_but_does_not_start() {
        assert!(!is_letter('_'));
        assert!(is_ident_char('_'));
    }

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\r', '\n'] {
            assert!(is_whitespace(c));
        }
        assert!(!is_whitespace('\u{0B}'));
        assert!(!is_whitespace('\u{A0}'));
    }
}
