//! Base tokenization for the kif lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become core token streams.
//!
//! Unlike a filtering tokenizer, failed matches are kept (as `Err(())`) so the caller can
//! report them as lexical errors instead of silently dropping input.

use crate::kif::token::CoreToken;
use logos::Logos;

/// Tokenize source code with location information
pub fn tokenize(source: &str) -> Vec<(Result<CoreToken, ()>, logos::Span)> {
    let mut lexer = CoreToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result, lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("(subclass Dog Animal)");
        assert_eq!(tokens.len(), 5);

        assert_eq!(tokens[0], (Ok(CoreToken::OpenParen), 0..1));
        assert_eq!(tokens[1], (Ok(CoreToken::Word), 1..9));
        assert_eq!(tokens[2], (Ok(CoreToken::Word), 10..13));
        assert_eq!(tokens[3], (Ok(CoreToken::Word), 14..20));
        assert_eq!(tokens[4], (Ok(CoreToken::CloseParen), 20..21));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        assert_eq!(tokenize("  \t\n; nothing here\n\r\n"), vec![]);
    }
}
