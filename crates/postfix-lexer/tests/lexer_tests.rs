//! Lexer tests for Postfix++.
//!
//! Covers: whitespace splitting, blank lines, token classification for
//! numbers, variables, operators, assignment, commands and invalid words,
//! and span tracking.

use postfix_lexer::{BinOp, Command, Lexer, TokenKind, ALL_COMMANDS};
use postfix_types::Span;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex a line and return just the token kinds.
fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).lex().into_iter().map(|t| t.kind).collect()
}

/// Lex a line and return just the token texts.
fn texts(source: &str) -> Vec<String> {
    Lexer::new(source).lex().into_iter().map(|t| t.text).collect()
}

/// Classify a single word.
fn kind(word: &str) -> TokenKind {
    TokenKind::classify(word)
}

// ─────────────────────────────────────────────────────────────────────
// Splitting
// ─────────────────────────────────────────────────────────────────────

#[test]
fn split_simple_line() {
    assert_eq!(texts("3 4 +"), vec!["3", "4", "+"]);
}

#[test]
fn split_collapses_whitespace_runs() {
    assert_eq!(texts("  3 \t 4\t\t+  "), vec!["3", "4", "+"]);
}

#[test]
fn empty_line_has_no_tokens() {
    assert!(Lexer::new("").lex().is_empty());
}

#[test]
fn whitespace_only_line_has_no_tokens() {
    assert!(Lexer::new(" \t  ").lex().is_empty());
}

#[test]
fn trailing_newline_is_ignored() {
    assert_eq!(texts("5 A =\n"), vec!["5", "A", "="]);
    assert_eq!(texts("5 A =\r\n"), vec!["5", "A", "="]);
}

#[test]
fn tokens_keep_original_text() {
    assert_eq!(texts("3.50 +4 1e3"), vec!["3.50", "+4", "1e3"]);
}

// ─────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────

#[test]
fn classify_integers_and_decimals() {
    assert_eq!(kind("42"), TokenKind::Number(42.0));
    assert_eq!(kind("3.14"), TokenKind::Number(3.14));
    assert_eq!(kind(".5"), TokenKind::Number(0.5));
    assert_eq!(kind("0"), TokenKind::Number(0.0));
}

#[test]
fn classify_signed_and_exponent_numbers() {
    assert_eq!(kind("-5"), TokenKind::Number(-5.0));
    assert_eq!(kind("+4"), TokenKind::Number(4.0));
    assert_eq!(kind("1e3"), TokenKind::Number(1000.0));
    assert_eq!(kind("2.5E-1"), TokenKind::Number(0.25));
}

#[test]
fn classify_non_finite_is_invalid() {
    assert_eq!(kind("inf"), TokenKind::Invalid);
    assert_eq!(kind("Infinity"), TokenKind::Invalid);
    assert_eq!(kind("NaN"), TokenKind::Invalid);
}

#[test]
fn classify_variables() {
    for c in 'A'..='Z' {
        assert_eq!(kind(&c.to_string()), TokenKind::Variable(c));
    }
}

#[test]
fn classify_lowercase_and_long_names_are_invalid() {
    assert_eq!(kind("a"), TokenKind::Invalid);
    assert_eq!(kind("AB"), TokenKind::Invalid);
    assert_eq!(kind("FOO"), TokenKind::Invalid);
}

#[test]
fn classify_operators() {
    assert_eq!(
        kinds("+ - * /"),
        vec![
            TokenKind::Operator(BinOp::Add),
            TokenKind::Operator(BinOp::Sub),
            TokenKind::Operator(BinOp::Mul),
            TokenKind::Operator(BinOp::Div),
        ]
    );
}

#[test]
fn classify_assign() {
    assert_eq!(kind("="), TokenKind::Assign);
    assert_eq!(kind("=="), TokenKind::Invalid);
}

#[test]
fn classify_all_commands() {
    for name in ALL_COMMANDS {
        assert!(
            matches!(kind(name), TokenKind::Command(_)),
            "{name} should classify as a command"
        );
    }
    assert_eq!(kind("SHOWVARS"), TokenKind::Command(Command::ShowVars));
}

#[test]
fn commands_are_case_sensitive() {
    assert_eq!(kind("print"), TokenKind::Invalid);
    assert_eq!(kind("Dup"), TokenKind::Invalid);
}

// ─────────────────────────────────────────────────────────────────────
// Spans
// ─────────────────────────────────────────────────────────────────────

#[test]
fn spans_track_columns() {
    let tokens = Lexer::new("10  A =").lex();
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![Span::new(1, 2), Span::new(5, 5), Span::new(7, 7)]
    );
}

#[test]
fn lex_determinism_100_iterations() {
    let source = "1 2 + A = A DUP * PRINT SHOWVARS";
    let first = Lexer::new(source).lex();
    for i in 0..100 {
        let result = Lexer::new(source).lex();
        assert_eq!(first, result, "Determinism failure at iteration {i}");
    }
}
