//! Grammar positions and the transition table
//!
//! ```text
//! Start --var--> Var --ident--> Identifier --:--> Colon --type--> Type --;--> Semicolon
//!                                  ^   |                                       |
//!                                  |   +--,--> Delimiter                        |
//!                                  +----ident-----+ <---------ident------------+
//! ```

use crate::decl::token::{Token, TokenKind, VAR_KEYWORD};
use serde::Serialize;
use std::fmt;

/// What kind of token is valid next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParseState {
    Start,
    Var,
    Identifier,
    Type,
    Delimiter,
    Colon,
    Semicolon,
}

impl ParseState {
    pub const ALL: [ParseState; 7] = [
        ParseState::Start,
        ParseState::Var,
        ParseState::Identifier,
        ParseState::Type,
        ParseState::Delimiter,
        ParseState::Colon,
        ParseState::Semicolon,
    ];

    /// A declaration block may only end after a completed declaration.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ParseState::Semicolon)
    }

    /// What this state accepts next.
    pub fn expectation(&self) -> Expectation {
        match self {
            ParseState::Start => Expectation::VarKeyword,
            ParseState::Var | ParseState::Delimiter | ParseState::Semicolon => {
                Expectation::Identifier
            }
            ParseState::Identifier => Expectation::ColonOrDelimiter,
            ParseState::Colon => Expectation::Type,
            ParseState::Type => Expectation::Semicolon,
        }
    }
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseState::Start => "Start",
            ParseState::Var => "Var",
            ParseState::Identifier => "Identifier",
            ParseState::Type => "Type",
            ParseState::Delimiter => "Delimiter",
            ParseState::Colon => "Colon",
            ParseState::Semicolon => "Semicolon",
        };
        f.write_str(name)
    }
}

/// Description of the tokens a state accepts, used in messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    VarKeyword,
    Identifier,
    ColonOrDelimiter,
    Type,
    Semicolon,
}

/// A token that does not fit the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub expected: Expectation,
    pub found: TokenKind,
}

/// Advance the state machine by one token.
///
/// # Errors
///
/// Returns a [`Mismatch`] when `token` is not valid in `state`. The caller
/// decides how to recover; this function never changes anything.
pub fn transition(state: ParseState, token: &Token) -> Result<ParseState, Mismatch> {
    let next = match (state, token.kind) {
        (ParseState::Start, _) if token.text == VAR_KEYWORD => Some(ParseState::Var),
        (ParseState::Var | ParseState::Delimiter | ParseState::Semicolon, TokenKind::Identifier) => {
            Some(ParseState::Identifier)
        }
        (ParseState::Identifier, TokenKind::Colon) => Some(ParseState::Colon),
        (ParseState::Identifier, TokenKind::Delimiter) => Some(ParseState::Delimiter),
        (ParseState::Colon, TokenKind::Type) => Some(ParseState::Type),
        (ParseState::Type, TokenKind::Semicolon) => Some(ParseState::Semicolon),
        _ => None,
    };

    next.ok_or(Mismatch {
        expected: state.expectation(),
        found: token.kind,
    })
}
