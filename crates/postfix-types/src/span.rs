use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a token within a single input line.
///
/// Columns are 1-based and count characters, not bytes. `end_col` is the
/// column of the token's last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_col: u32,
    pub end_col: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start_col: u32, end_col: u32) -> Self {
        Self { start_col, end_col }
    }

    /// Create a span covering a single column.
    pub fn point(col: u32) -> Self {
        Self::new(col, col)
    }

}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_col == self.end_col {
            write!(f, "col {}", self.start_col)
        } else {
            write!(f, "cols {}-{}", self.start_col, self.end_col)
        }
    }
}
