//! Postfix++ lexer: splits an input line into classified tokens.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{BinOp, Command, Token, TokenKind, ALL_COMMANDS};
