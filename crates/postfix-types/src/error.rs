use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Token,
    Name,
    Stack,
    Arithmetic,
}

/// Numeric error code (E100–E499).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Token errors (E100–E199) ──
    pub const INVALID_TOKEN: Self = Self(100);
    pub const UNKNOWN_TOKEN: Self = Self(101);

    // ── Name errors (E200–E299) ──
    pub const UNDEFINED_VARIABLE: Self = Self(200);
    pub const INVALID_ASSIGNMENT_TARGET: Self = Self(201);

    // ── Stack errors (E300–E399) ──
    pub const INSUFFICIENT_OPERANDS: Self = Self(300);
    pub const EMPTY_STACK: Self = Self(301);

    // ── Arithmetic errors (E400–E499) ──
    pub const DIVISION_BY_ZERO: Self = Self(400);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Token,
            200..=299 => ErrorCategory::Name,
            300..=399 => ErrorCategory::Stack,
            400..=499 => ErrorCategory::Arithmetic,
            _ => ErrorCategory::Token, // fallback
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => write!(f, "token"),
            Self::Name => write!(f, "name"),
            Self::Stack => write!(f, "stack"),
            Self::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

/// A structured evaluation error, ready to hand to a front end.
///
/// Front ends render these from the fields; they should not parse the
/// free-form `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Error code (e.g., E300).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Location of the offending token in the line, if known.
    #[serde(flatten)]
    pub span: Option<Span>,
    /// The offending token text, if the error is about one token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic without location information.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            span: None,
            token: None,
        }
    }

    /// Attach the span of the offending token.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach the offending token text.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(
                f,
                "{}: {} [{}] {}",
                span, self.code, self.category, self.message
            ),
            None => write!(f, "{} [{}] {}", self.code, self.category, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}
