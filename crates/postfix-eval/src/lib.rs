//! Postfix++ evaluator.
//!
//! Executes one line of postfix source at a time against an operand stack
//! and a single-letter symbol table. Both persist between lines for the
//! lifetime of the [`Evaluator`].
//!
//! Front ends that want more than the error message can combine
//! [`EvalError::to_diagnostic`] with [`Evaluator::last_error_span`] to get a
//! serializable [`postfix_types::Diagnostic`] pointing at the failing token.

pub mod error;
pub mod evaluator;
pub mod stack;
pub mod symbols;

pub use error::{EvalError, EvalResult};
pub use evaluator::{Evaluator, NO_VARIABLES_NOTICE};
pub use stack::{format_number, OperandStack, StackValue};
pub use symbols::SymbolTable;
