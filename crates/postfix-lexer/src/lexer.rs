//! Postfix++ lexer — splits one input line into a token stream.
//!
//! Words are separated by runs of whitespace. A blank or whitespace-only
//! line produces no tokens at all, so evaluating it is a no-op.

use postfix_types::Span;

use crate::token::Token;

/// The Postfix++ lexer for a single line.
pub struct Lexer<'src> {
    /// The line being split.
    source: &'src str,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given line.
    pub fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Split the line into classified tokens, left to right.
    pub fn lex(self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word = String::new();
        let mut start_col = 0u32;
        let mut col = 0u32;

        for ch in self.source.chars() {
            col += 1;
            if ch.is_whitespace() {
                if !word.is_empty() {
                    tokens.push(Token::new(
                        std::mem::take(&mut word),
                        Span::new(start_col, col - 1),
                    ));
                }
                continue;
            }
            if word.is_empty() {
                start_col = col;
            }
            word.push(ch);
        }

        if !word.is_empty() {
            tokens.push(Token::new(word, Span::new(start_col, col)));
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_are_character_columns() {
        let tokens = Lexer::new("ä 12").lex();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].span, Span::new(1, 1));
        assert_eq!(tokens[1].span, Span::new(3, 4));
    }
}
