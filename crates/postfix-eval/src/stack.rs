//! Operand stack for the Postfix++ evaluator.

use std::fmt;

/// One stack entry.
///
/// Literals are stored exactly as they were written and are resolved only
/// when an operator or `=` consumes them. Arithmetic results are stored as
/// numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum StackValue {
    /// Unresolved number or variable text, verbatim.
    Token(String),
    /// Result of an arithmetic operator.
    Number(f64),
}

impl fmt::Display for StackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(text) => f.write_str(text),
            Self::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for StackValue {
    fn from(text: &str) -> Self {
        Self::Token(text.to_string())
    }
}

impl From<f64> for StackValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Render a number for display: integral values have no fractional part,
/// negative zero prints as `0` and overflow prints as `Infinity`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{n}")
    }
}

/// LIFO operand stack. Index 0 is the bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    items: Vec<StackValue>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: StackValue) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<StackValue> {
        self.items.pop()
    }

    /// The top entry, without removing it.
    pub fn peek(&self) -> Option<&StackValue> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Exchange the top two entries. Returns `false` if there are fewer
    /// than two.
    pub fn swap_top(&mut self) -> bool {
        let n = self.items.len();
        if n < 2 {
            return false;
        }
        self.items.swap(n - 1, n - 2);
        true
    }

    pub fn as_slice(&self) -> &[StackValue] {
        &self.items
    }
}

impl fmt::Display for OperandStack {
    /// Renders `[bottom, ..., top]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
