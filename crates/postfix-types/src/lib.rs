//! Shared types for the Postfix++ toolchain.
//!
//! This crate defines token spans and the structured error types used by
//! the lexer, the evaluator and the REPL.

mod error;
mod span;

pub use error::{Diagnostic, ErrorCategory, ErrorCode};
pub use span::Span;
