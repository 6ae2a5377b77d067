//! Token types for the Postfix++ lexer.
//!
//! Defines [`TokenKind`], the closed classification every input word falls
//! into, and [`Token`], which pairs the original text with its kind and
//! [`Span`].

use postfix_types::Span;
use std::fmt;

/// All stack and symbol-table commands, spelled exactly as accepted.
pub const ALL_COMMANDS: &[&str] = &["PRINT", "CLEAR", "SHOWVARS", "DUP", "SWAP", "DROP"];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single whitespace-delimited word of an input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The word exactly as written.
    pub text: String,
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Location within the line.
    pub span: Span,
}

impl Token {
    /// Classify `text` and build a token for it.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        let text = text.into();
        let kind = TokenKind::classify(&text);
        Self { text, kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in Postfix++.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Finite numeric literal: `42`, `-3.5`, `1e3`
    Number(f64),
    /// Single uppercase letter: `A` .. `Z`
    Variable(char),
    /// Arithmetic operator: `+ - * /`
    Operator(BinOp),
    /// `=`
    Assign,
    /// Stack or symbol-table command: `PRINT`, `DUP`, ...
    Command(Command),
    /// Anything else.
    Invalid,
}

impl TokenKind {
    /// Classify a word.
    ///
    /// Numbers are tried first so that `-5` is a literal while a lone `-`
    /// is the subtraction operator.
    pub fn classify(text: &str) -> Self {
        if let Some(n) = parse_number(text) {
            return Self::Number(n);
        }
        if let Some(c) = parse_variable(text) {
            return Self::Variable(c);
        }
        if let Some(op) = BinOp::from_symbol(text) {
            return Self::Operator(op);
        }
        if text == "=" {
            return Self::Assign;
        }
        if let Some(cmd) = Command::from_name(text) {
            return Self::Command(cmd);
        }
        Self::Invalid
    }
}

/// Parse `text` as a finite double. `inf` and `NaN` are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse `text` as a variable name: exactly one ASCII uppercase letter.
pub fn parse_variable(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Some(c),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Operators & commands
// ─────────────────────────────────────────────────────────────────────

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Built-in commands. Names are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Print,
    Clear,
    ShowVars,
    Dup,
    Swap,
    Drop,
}

impl Command {
    pub fn from_name(text: &str) -> Option<Self> {
        match text {
            "PRINT" => Some(Self::Print),
            "CLEAR" => Some(Self::Clear),
            "SHOWVARS" => Some(Self::ShowVars),
            "DUP" => Some(Self::Dup),
            "SWAP" => Some(Self::Swap),
            "DROP" => Some(Self::Drop),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Print => "PRINT",
            Self::Clear => "CLEAR",
            Self::ShowVars => "SHOWVARS",
            Self::Dup => "DUP",
            Self::Swap => "SWAP",
            Self::Drop => "DROP",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
