//! Token definitions for var declaration blocks
//!
//! The logos derive on [`TokenKind`] does the actual scanning. Keywords and the
//! primitive type names are literal tokens, so they win over the identifier
//! regex when the match lengths are equal, and lose to it when the identifier
//! run is longer (`variable`, `integers`).
//!
//! Every non-whitespace character the other patterns do not claim falls
//! through to [`TokenKind::Unknown`], which keeps the lexer total: it never
//! reports an error, the validator does.

use logos::Logos;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// The keyword that opens a declaration block.
pub const VAR_KEYWORD: &str = "var";

/// Primitive type names accepted after a colon.
pub const PRIMITIVE_TYPES: [&str; 4] = ["integer", "real", "boolean", "char"];

/// All possible token kinds
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("var")]
    Keyword,

    #[token("integer")]
    #[token("real")]
    #[token("boolean")]
    #[token("char")]
    Type,

    #[regex(r"[A-Za-z][A-Za-z0-9]*", priority = 3)]
    Identifier,

    #[token(",")]
    Delimiter,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,

    // A single digit; digits after a letter belong to the identifier run
    #[regex(r"[0-9]", priority = 3)]
    Digit,

    #[regex(r"[^ \t\r\n]", priority = 1)]
    Unknown,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Keyword,
        TokenKind::Type,
        TokenKind::Identifier,
        TokenKind::Delimiter,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Digit,
        TokenKind::Unknown,
    ];
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Type => "Type",
            TokenKind::Identifier => "Identifier",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Colon => "Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Digit => "Digit",
            TokenKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// A classified slice of the source.
///
/// `offset` is the zero-based character index of the first character, not a
/// byte index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    /// Character index just past the last character of this token.
    pub fn end(&self) -> usize {
        self.offset + self.text.chars().count()
    }

    /// Half-open character range covered by this token.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.text, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source)
            .map(|result| result.unwrap_or(TokenKind::Unknown))
            .collect()
    }

    #[test]
    fn test_keyword_and_types() {
        assert_eq!(kinds("var"), vec![TokenKind::Keyword]);
        for name in PRIMITIVE_TYPES {
            assert_eq!(kinds(name), vec![TokenKind::Type], "type {}", name);
        }
    }

    #[test]
    fn test_longer_words_are_identifiers() {
        assert_eq!(kinds("variable"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("integers"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("var1"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("Var"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds(", : ;"),
            vec![TokenKind::Delimiter, TokenKind::Colon, TokenKind::Semicolon]
        );
    }

    #[test]
    fn test_digits_split_outside_identifiers() {
        assert_eq!(kinds("42"), vec![TokenKind::Digit, TokenKind::Digit]);
        assert_eq!(
            kinds("4x2"),
            vec![TokenKind::Digit, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(kinds("@"), vec![TokenKind::Unknown]);
        assert_eq!(kinds("é"), vec![TokenKind::Unknown]);
        assert_eq!(
            kinds("a.b"),
            vec![TokenKind::Identifier, TokenKind::Unknown, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(kinds(" \t\r\n"), vec![]);
    }

    #[test]
    fn test_token_span() {
        let token = Token::new(TokenKind::Identifier, "abc", 4);
        assert_eq!(token.end(), 7);
        assert_eq!(token.span(), 4..7);
        assert_eq!(token.to_string(), "Identifier(\"abc\")@4");

        let wide = Token::new(TokenKind::Unknown, "ж", 2);
        assert_eq!(wide.span(), 2..3);
    }
}
