//! Token definitions.
//!
//! A [`Token`] is the classified, positioned fragment of source text the
//! scanner hands to its caller. Its [`TokenKind`] comes from a closed set
//! whose string spelling ([`TokenKind::as_str`]) is stable and used by the
//! token dump format.

use std::fmt;
use std::sync::LazyLock;

use mkyc_util::FxHashMap;

/// The closed set of token categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Special
    /// A character the scanner has no rule for
    Illegal,
    /// End of input; repeats once reached
    EndOfInput,

    // Identifiers and literals
    /// A name that is not a reserved word
    Identifier,
    /// A run of decimal digits
    Integer,

    // Keywords
    /// `let`
    Let,
    /// `fn`
    Function,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `true`
    True,
    /// `false`
    False,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `!`
    Not,

    // Comparison
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // Comments
    /// `// ...` up to the end of the line
    LineComment,
    /// `/* ... */`, possibly spanning lines
    BlockComment,
}

impl TokenKind {
    /// Returns the stable spelling of this kind.
    ///
    /// Keywords and special kinds use an upper-case name, punctuation uses
    /// its own text, and comments use their opening marker.
    ///
    /// # Example
    ///
    /// ```
    /// use mkyc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Function.as_str(), "FN");
    /// assert_eq!(TokenKind::NotEqual.as_str(), "!=");
    /// assert_eq!(TokenKind::BlockComment.as_str(), "/*");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Let => "LET",
            TokenKind::Function => "FN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Not => "!",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThan => "<",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LineComment => "//",
            TokenKind::BlockComment => "/*",
        }
    }

    /// Returns true for reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Function
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Returns true for both comment kinds.
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved spellings, built once on first lookup.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ]
    .into_iter()
    .collect()
});

/// Looks up a reserved word.
///
/// Returns `None` when `ident` is not an exact keyword spelling.
///
/// # Example
///
/// ```
/// use mkyc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("return"), Some(TokenKind::Return));
/// assert_eq!(keyword_from_ident("returns"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// Classifies an identifier spelling: its keyword kind, or `Identifier`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keyword_from_ident(ident).unwrap_or(TokenKind::Identifier)
}

/// A classified, positioned fragment of source text.
///
/// Tokens are built once by the scanner and never mutated; the fields are
/// read through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    line: u32,
    column: u32,
}

impl Token {
    /// Builds a token from its kind, literal text and 1-based position.
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            column,
        }
    }

    /// Builds the end-of-input token, which always has an empty literal.
    pub fn eof(line: u32, column: u32) -> Self {
        Self::new(TokenKind::EndOfInput, String::new(), line, column)
    }

    /// The token category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text that produced the token.
    ///
    /// For comments this is only the text between the markers.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Line of the token's first character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the token's first character (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Consumes the token, returning its literal.
    pub fn into_literal(self) -> String {
        self.literal
    }
}

impl fmt::Display for Token {
    /// Renders the token dump line: `KIND: 'literal' at line:column`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' at {}:{}",
            self.kind, self.literal, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_is_complete() {
        let expected = [
            ("fn", TokenKind::Function),
            ("let", TokenKind::Let),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("return", TokenKind::Return),
        ];
        for (spelling, kind) in expected {
            assert_eq!(keyword_from_ident(spelling), Some(kind));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_lookup_ident_falls_back_to_identifier() {
        assert_eq!(lookup_ident("five"), TokenKind::Identifier);
        assert_eq!(lookup_ident("Let"), TokenKind::Identifier);
        assert_eq!(lookup_ident("letter"), TokenKind::Identifier);
        assert_eq!(lookup_ident("let"), TokenKind::Let);
    }

    #[test]
    fn test_kind_spelling() {
        assert_eq!(TokenKind::Illegal.as_str(), "ILLEGAL");
        assert_eq!(TokenKind::EndOfInput.as_str(), "EOF");
        assert_eq!(TokenKind::Identifier.as_str(), "IDENT");
        assert_eq!(TokenKind::Integer.as_str(), "INT");
        assert_eq!(TokenKind::Equal.as_str(), "==");
        assert_eq!(TokenKind::LineComment.as_str(), "//");
        assert_eq!(TokenKind::Semicolon.to_string(), ";");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::LineComment.is_comment());
        assert!(TokenKind::BlockComment.is_comment());
        assert!(!TokenKind::Slash.is_comment());
        assert!(!TokenKind::Identifier.is_keyword());
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Identifier, "five", 1, 5);
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.literal(), "five");
        assert_eq!(token.line(), 1);
        assert_eq!(token.column(), 5);
        assert!(!token.is_eof());
        assert_eq!(token.into_literal(), "five");
    }

    #[test]
    fn test_eof_token() {
        let token = Token::eof(2, 1);
        assert!(token.is_eof());
        assert_eq!(token.literal(), "");
    }

    #[test]
    fn test_token_dump_format() {
        let token = Token::new(TokenKind::Let, "let", 1, 1);
        assert_eq!(token.to_string(), "LET: 'let' at 1:1");

        let token = Token::new(TokenKind::NotEqual, "!=", 3, 7);
        assert_eq!(token.to_string(), "!=: '!=' at 3:7");
    }
}
