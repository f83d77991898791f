//! Tokenization of declaration sources
//!
//! Thin convenience layer over the logos lexer in [`token`](crate::decl::token).
//! The lexer is total, so tokenizing never fails: characters no pattern
//! claims come back as [`TokenKind::Unknown`].

use crate::decl::token::{Token, TokenKind};
use logos::Logos;

/// Tokenize a source string into owned tokens
///
/// Offsets count characters, not bytes. logos spans are byte ranges; a running
/// cursor converts them.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Unknown);
        let span = lexer.span();
        char_cursor += source[byte_cursor..span.start].chars().count();

        let token = Token::new(kind, lexer.slice(), char_cursor);
        char_cursor = token.end();
        byte_cursor = span.end;
        tokens.push(token);
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    tokens
}
