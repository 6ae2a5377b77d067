//! Runtime error types for the Postfix++ evaluator.

use postfix_types::{Diagnostic, ErrorCode, Span};
use thiserror::Error;

/// Evaluation error. Aborts the current line; never fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A stack entry could not be resolved to a number.
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// A word is not a literal, operator, `=` or command.
    #[error("unknown token: {0}")]
    UnknownToken(String),
    /// Variable read before it was assigned.
    #[error("variable {0} is not defined")]
    UndefinedVariable(String),
    /// Operator, `=` or `SWAP` with too few stack entries.
    #[error("'{op}' needs {needed} operands, found {found}")]
    InsufficientOperands {
        op: String,
        needed: usize,
        found: usize,
    },
    /// Left-hand side of `=` is not a single uppercase letter.
    #[error("assignment target must be a variable A-Z, found '{0}'")]
    InvalidAssignmentTarget(String),
    /// Divisor resolved to exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// `PRINT`, `DUP` or `DROP` on an empty stack.
    #[error("'{op}' on empty stack")]
    EmptyStack { op: String },
}

impl EvalError {
    /// Stable error code for this error kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidToken(_) => ErrorCode::INVALID_TOKEN,
            Self::UnknownToken(_) => ErrorCode::UNKNOWN_TOKEN,
            Self::UndefinedVariable(_) => ErrorCode::UNDEFINED_VARIABLE,
            Self::InsufficientOperands { .. } => ErrorCode::INSUFFICIENT_OPERANDS,
            Self::InvalidAssignmentTarget(_) => ErrorCode::INVALID_ASSIGNMENT_TARGET,
            Self::DivisionByZero => ErrorCode::DIVISION_BY_ZERO,
            Self::EmptyStack { .. } => ErrorCode::EMPTY_STACK,
        }
    }

    /// The token text the error is about, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::InvalidToken(t)
            | Self::UnknownToken(t)
            | Self::UndefinedVariable(t)
            | Self::InvalidAssignmentTarget(t) => Some(t),
            Self::InsufficientOperands { op, .. } | Self::EmptyStack { op } => Some(op),
            Self::DivisionByZero => None,
        }
    }

    /// Build a structured diagnostic, optionally pointing at a token.
    pub fn to_diagnostic(&self, span: Option<Span>) -> Diagnostic {
        let mut diag = Diagnostic::new(self.code(), self.to_string());
        if let Some(token) = self.token() {
            diag = diag.with_token(token);
        }
        if let Some(span) = span {
            diag = diag.with_span(span);
        }
        diag
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
