//! Lexing and validation of `var` declaration blocks
//!
//! Pipeline: source text → [`lexing::tokenize`] → tokens →
//! [`validation::validate`] → [`validation::ValidationReport`].
//!
//! Both stages are pure functions over their input; nothing is cached between
//! calls, so independent sources can be checked from different threads.

pub mod lexing;
pub mod location;
pub mod messages;
pub mod processor;
pub mod samples;
pub mod token;
pub mod validation;

pub use lexing::tokenize;
pub use messages::Language;
pub use token::{Token, TokenKind};
pub use validation::{validate, Diagnostic, DiagnosticKind, ParseState, ValidationReport};

/// Tokenize and validate in one call
pub fn check(source: &str) -> ValidationReport {
    validate(&tokenize(source))
}
