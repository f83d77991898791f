//! # vardecl
//!
//! A tokenizer and error-recovering validator for `var` declaration blocks:
//!
//! ```text
//! var
//!     count, total: integer;
//!     ratio: real;
//! ```
//!
//! The checker reports every deviation from the grammar it can find in one
//! pass instead of stopping at the first one. See [`decl`] for the pipeline and
//! [`settings`] for the settings the command-line tool reads.

pub mod settings;
pub mod decl;

pub use decl::{check, tokenize, validate};
