//! Validation of token sequences against the declaration grammar
//!
//! The validator walks the tokens once, driving the [`ParseState`] machine.
//! A token that does not fit produces a [`Diagnostic`] and the state is
//! resynchronized with [`predict`], so a single run reports every independent
//! error instead of stopping at the first one.
//!
//! Grammar
//!
//!     block       = "var" declaration+
//!     declaration = identifier ("," identifier)* ":" type ";"
//!     type        = "integer" | "real" | "boolean" | "char"

pub mod diagnostic;
pub mod recovery;
pub mod state;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use recovery::predict;
pub use state::{transition, Expectation, Mismatch, ParseState};

use crate::decl::token::Token;
use serde::Serialize;

/// One token's effect on the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateStep {
    /// Position of the token in the validated slice
    pub index: usize,
    pub from: ParseState,
    pub to: ParseState,
    /// `to` was chosen by recovery rather than by a valid transition
    pub recovered: bool,
}

/// Everything a validation run produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub final_state: ParseState,
    pub diagnostics: Vec<Diagnostic>,
    pub trace: Vec<StateStep>,
}

impl ValidationReport {
    /// True when the input is a complete, well-formed declaration block.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn recovered_steps(&self) -> impl Iterator<Item = &StateStep> {
        self.trace.iter().filter(|step| step.recovered)
    }
}

/// Check a token sequence against the grammar.
///
/// Never fails: mismatches become diagnostics and the scan always reaches the
/// last token.
pub fn validate(tokens: &[Token]) -> ValidationReport {
    let mut state = ParseState::Start;
    let mut diagnostics = Vec::new();
    let mut trace = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let from = state;
        let step = match transition(state, token) {
            Ok(next) => {
                tracing::trace!(%from, to = %next, token = %token, "transition");
                StateStep {
                    index,
                    from,
                    to: next,
                    recovered: false,
                }
            }
            Err(mismatch) => {
                let next = predict(state, tokens.get(index + 1));
                tracing::debug!(
                    %from,
                    recovered_to = %next,
                    token = %token,
                    expected = ?mismatch.expected,
                    "unexpected token"
                );
                diagnostics.push(Diagnostic::unexpected(state, mismatch, token));
                StateStep {
                    index,
                    from,
                    to: next,
                    recovered: true,
                }
            }
        };
        state = step.to;
        trace.push(step);
    }

    if !state.is_terminal() {
        let end = tokens.last().map_or(0, Token::end);
        diagnostics.push(Diagnostic::unterminated(state, end));
    }

    tracing::debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        final_state = %state,
        "validation finished"
    );

    ValidationReport {
        final_state: state,
        diagnostics,
        trace,
    }
}
