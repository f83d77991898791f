//! Diagnostics reported by the validator

use crate::decl::messages::Language;
use crate::decl::token::{Token, TokenKind};
use crate::decl::validation::state::{Expectation, Mismatch, ParseState};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The token does not fit the state the validator was in.
    UnexpectedToken {
        state: ParseState,
        expected: Expectation,
        found: TokenKind,
        found_text: String,
    },
    /// The input ended before a declaration was completed.
    UnterminatedDeclaration { state: ParseState },
}

/// A grammar deviation with the character range to highlight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    pub range: Range<usize>,
}

impl Diagnostic {
    pub fn unexpected(state: ParseState, mismatch: Mismatch, token: &Token) -> Self {
        Self {
            kind: DiagnosticKind::UnexpectedToken {
                state,
                expected: mismatch.expected,
                found: mismatch.found,
                found_text: token.text.clone(),
            },
            range: token.span(),
        }
    }

    /// `at` is where the input ended; the range is empty.
    pub fn unterminated(state: ParseState, at: usize) -> Self {
        Self {
            kind: DiagnosticKind::UnterminatedDeclaration { state },
            range: at..at,
        }
    }

    /// The state the validator was in when this was reported.
    pub fn state(&self) -> ParseState {
        match &self.kind {
            DiagnosticKind::UnexpectedToken { state, .. }
            | DiagnosticKind::UnterminatedDeclaration { state } => *state,
        }
    }

    pub fn is_unexpected_token(&self) -> bool {
        matches!(self.kind, DiagnosticKind::UnexpectedToken { .. })
    }

    pub fn is_unterminated(&self) -> bool {
        matches!(self.kind, DiagnosticKind::UnterminatedDeclaration { .. })
    }

    /// Message text in the given language
    pub fn message_in(&self, lang: Language) -> String {
        match &self.kind {
            DiagnosticKind::UnexpectedToken {
                expected,
                found,
                found_text,
                ..
            } => lang.unexpected_token(*expected, *found, found_text),
            DiagnosticKind::UnterminatedDeclaration { .. } => lang.unterminated().to_string(),
        }
    }

    /// Message text in English
    pub fn message(&self) -> String {
        self.message_in(Language::En)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
