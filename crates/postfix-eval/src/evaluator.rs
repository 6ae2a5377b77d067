//! Core token evaluator.

use crate::error::{EvalError, EvalResult};
use crate::stack::{format_number, OperandStack, StackValue};
use crate::symbols::SymbolTable;
use postfix_lexer::token::{parse_number, parse_variable};
use postfix_lexer::{BinOp, Command, Lexer, Token, TokenKind};
use postfix_types::Span;

/// Line emitted by `SHOWVARS` when nothing has been assigned yet.
pub const NO_VARIABLES_NOTICE: &str = "no variables defined";

/// The Postfix++ evaluator — executes lines against a persistent operand
/// stack and symbol table.
///
/// Evaluation is not transactional: when a token fails, the effects of the
/// tokens before it on the same line stay in place. Callers that want a
/// clean slate after an error call [`Evaluator::reset_stack`].
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Operand stack.
    stack: OperandStack,
    /// Variable bindings, kept across lines.
    symbols: SymbolTable,
    /// Captured output from `PRINT` and `SHOWVARS`, one entry per line.
    output: Vec<String>,
    /// Span of the token that failed during the last `evaluate`.
    error_span: Option<Span>,
}

impl Evaluator {
    /// Create an evaluator with an empty stack and symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one line of source, token by token, stopping at the first
    /// error.
    pub fn evaluate(&mut self, line: &str) -> EvalResult<()> {
        self.error_span = None;
        for token in Lexer::new(line).lex() {
            if let Err(err) = self.exec_token(&token) {
                self.error_span = Some(token.span);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Resolve number or variable text to its numeric value.
    pub fn resolve(&self, text: &str) -> EvalResult<f64> {
        if let Some(n) = parse_number(text) {
            return Ok(n);
        }
        if let Some(name) = parse_variable(text) {
            return self
                .symbols
                .get(name)
                .ok_or_else(|| EvalError::UndefinedVariable(text.to_string()));
        }
        Err(EvalError::InvalidToken(text.to_string()))
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Empty the operand stack. The symbol table is untouched.
    pub fn reset_stack(&mut self) {
        self.stack.clear();
    }

    /// Output produced since the last call, oldest first.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    /// Location of the token that failed in the most recent `evaluate`,
    /// or `None` if it succeeded. Pass it to [`EvalError::to_diagnostic`]
    /// for structured error reporting.
    pub fn last_error_span(&self) -> Option<Span> {
        self.error_span
    }

    // ══════════════════════════════════════════════════════════════════════
    // Token dispatch
    // ══════════════════════════════════════════════════════════════════════

    fn exec_token(&mut self, token: &Token) -> EvalResult<()> {
        match token.kind {
            TokenKind::Number(_) | TokenKind::Variable(_) => {
                self.stack.push(StackValue::Token(token.text.clone()));
                Ok(())
            }
            TokenKind::Assign => self.exec_assign(),
            TokenKind::Operator(op) => self.exec_binary(op),
            TokenKind::Command(cmd) => self.exec_command(cmd),
            TokenKind::Invalid => Err(EvalError::UnknownToken(token.text.clone())),
        }
    }

    fn resolve_value(&self, value: &StackValue) -> EvalResult<f64> {
        match value {
            StackValue::Number(n) => Ok(*n),
            StackValue::Token(text) => self.resolve(text),
        }
    }

    /// Pop the top two entries as `(second, top)`.
    fn pop_pair(&mut self, op: &str) -> EvalResult<(StackValue, StackValue)> {
        let found = self.stack.len();
        match (self.stack.pop(), self.stack.pop()) {
            (Some(top), Some(second)) => Ok((second, top)),
            (top, _) => {
                if let Some(top) = top {
                    self.stack.push(top);
                }
                Err(EvalError::InsufficientOperands {
                    op: op.to_string(),
                    needed: 2,
                    found,
                })
            }
        }
    }

    // ── Assignment ────────────────────────────────────────────────────────

    /// `VAR value =` binds VAR and then clears the whole stack.
    ///
    /// The entry below the top is the target. If it is not a variable but
    /// the top is, the operands are taken the other way round (`value VAR =`).
    fn exec_assign(&mut self) -> EvalResult<()> {
        let (second, top) = self.pop_pair("=")?;
        let (name, value) = match (as_variable(&second), as_variable(&top)) {
            (Some(name), _) => (name, top),
            (None, Some(name)) => (name, second),
            (None, None) => {
                return Err(EvalError::InvalidAssignmentTarget(second.to_string()));
            }
        };

        let resolved = self.resolve_value(&value)?;
        self.symbols.assign(name, resolved);
        self.stack.clear();
        Ok(())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────

    fn exec_binary(&mut self, op: BinOp) -> EvalResult<()> {
        let (a, b) = self.pop_pair(op.symbol())?;
        let b = self.resolve_value(&b)?;
        let a = self.resolve_value(&a)?;
        let result = match op {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
        };
        self.stack.push(StackValue::Number(result));
        Ok(())
    }

    // ── Commands ──────────────────────────────────────────────────────────

    fn exec_command(&mut self, cmd: Command) -> EvalResult<()> {
        match cmd {
            Command::Print => {
                // Prints the stored entry as-is; variables are not resolved.
                let top = self.peek_or_empty(cmd)?.to_string();
                self.output.push(top);
            }
            Command::Clear => self.stack.clear(),
            Command::ShowVars => self.show_vars(),
            Command::Dup => {
                let top = self.peek_or_empty(cmd)?.clone();
                self.stack.push(top);
            }
            Command::Swap => {
                if !self.stack.swap_top() {
                    return Err(EvalError::InsufficientOperands {
                        op: cmd.name().to_string(),
                        needed: 2,
                        found: self.stack.len(),
                    });
                }
            }
            Command::Drop => {
                self.stack.pop().ok_or_else(|| EvalError::EmptyStack {
                    op: cmd.name().to_string(),
                })?;
            }
        }
        Ok(())
    }

    fn peek_or_empty(&self, cmd: Command) -> EvalResult<&StackValue> {
        self.stack.peek().ok_or_else(|| EvalError::EmptyStack {
            op: cmd.name().to_string(),
        })
    }

    fn show_vars(&mut self) {
        if self.symbols.is_empty() {
            self.output.push(NO_VARIABLES_NOTICE.to_string());
            return;
        }
        for (name, value) in self.symbols.iter() {
            self.output.push(format!("{name} = {}", format_number(value)));
        }
    }
}

/// The variable name of an unresolved single-letter entry.
fn as_variable(value: &StackValue) -> Option<char> {
    match value {
        StackValue::Token(text) => parse_variable(text),
        StackValue::Number(_) => None,
    }
}
