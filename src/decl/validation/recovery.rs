//! Resynchronization after a mismatch
//!
//! Recovery only changes what the validator expects next. It never invents or
//! skips tokens, so every later token is still checked against some state.

use crate::decl::token::{Token, TokenKind};
use crate::decl::validation::state::ParseState;

/// Pick the state to continue from after `state` rejected a token.
///
/// `next` is the token after the rejected one, if any. Only the identifier
/// state looks at it: another identifier means the author probably forgot a
/// comma, a type means the colon is missing.
pub fn predict(state: ParseState, next: Option<&Token>) -> ParseState {
    match state {
        ParseState::Start => ParseState::Var,
        ParseState::Var => ParseState::Identifier,
        ParseState::Identifier => match next.map(|token| token.kind) {
            Some(TokenKind::Identifier) => ParseState::Delimiter,
            Some(TokenKind::Type) => ParseState::Colon,
            _ => ParseState::Identifier,
        },
        ParseState::Type => ParseState::Semicolon,
        ParseState::Delimiter => ParseState::Identifier,
        ParseState::Colon => ParseState::Type,
        ParseState::Semicolon => ParseState::Identifier,
    }
}
