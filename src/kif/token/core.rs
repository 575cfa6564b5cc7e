//! Token definitions for SUO-KIF
//!
//! `CoreToken` is the logos-derived DFA over raw source text. Words are not split further by
//! logos; number / variable / atom classification happens in
//! [classification](crate::kif::lexing::classification) so that lexical errors can be
//! reported against the whole word.

use logos::Logos;
use std::fmt;
use std::ops::Range as ByteRange;
use std::sync::Arc;

/// Raw lexical classes recognised by logos
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|;[^\n]*)")]
pub enum CoreToken {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    // Strings may span lines; a backslash escapes whatever follows it
    #[regex(r#""([^"\\]|\\[\s\S])*""#)]
    String,

    // Same body without the closing quote: only wins when the input ends first
    #[regex(r#""([^"\\]|\\[\s\S])*\\?"#)]
    UnterminatedString,

    // Anything else up to whitespace, a paren, a quote or a comment
    #[regex(r#"[^\s()";]+"#)]
    Word,
}

/// Classified token kinds consumed by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Atom,
    String,
    Number,
    Variable,
    RowVariable,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Atom => "ATOM",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Variable => "VARIABLE",
            TokenKind::RowVariable => "ROW_VARIABLE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified token with its source location
///
/// `text` is the exact source slice, so `offset..offset + text.len()` is the token's span.
/// `line` and `column` are 0-based; the column counts bytes from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub source_id: Arc<str>,
}

impl Token {
    /// Byte span of the token in its source
    pub fn span(&self) -> ByteRange<usize> {
        self.offset..self.end()
    }

    /// Byte offset one past the last byte of the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Line and column one past the token's last character
    pub fn end_line_column(&self) -> (usize, usize) {
        match self.text.rfind('\n') {
            Some(last_newline) => (
                self.line + self.text.matches('\n').count(),
                self.text.len() - last_newline - 1,
            ),
            None => (self.line, self.column + self.text.len()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} {} {:?}",
            self.source_id, self.line, self.column, self.kind, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_tokens(source: &str) -> Vec<CoreToken> {
        CoreToken::lexer(source)
            .filter_map(|result| result.ok())
            .collect()
    }

    #[test]
    fn test_parens_and_words() {
        assert_eq!(
            core_tokens("(instance ?X Foo)"),
            vec![
                CoreToken::OpenParen,
                CoreToken::Word,
                CoreToken::Word,
                CoreToken::Word,
                CoreToken::CloseParen,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            core_tokens("; a comment (with parens)\nFoo ; trailing"),
            vec![CoreToken::Word]
        );
    }

    #[test]
    fn test_semicolon_ends_a_word() {
        assert_eq!(core_tokens("Foo;bar baz"), vec![CoreToken::Word]);
    }

    #[test]
    fn test_multiline_string() {
        assert_eq!(core_tokens("\"line one\nline two\""), vec![CoreToken::String]);
    }

    #[test]
    fn test_escaped_quote_stays_inside_string() {
        assert_eq!(core_tokens(r#""say \"hi\"" Foo"#), vec![CoreToken::String, CoreToken::Word]);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            core_tokens("(documentation Foo \"never closed"),
            vec![
                CoreToken::OpenParen,
                CoreToken::Word,
                CoreToken::Word,
                CoreToken::UnterminatedString,
            ]
        );
    }

    #[test]
    fn test_token_end_line_column() {
        let token = Token {
            kind: TokenKind::String,
            text: "\"ab\ncde\"".to_string(),
            line: 2,
            column: 4,
            offset: 10,
            source_id: Arc::from("test"),
        };
        assert_eq!(token.span(), 10..18);
        assert_eq!(token.end_line_column(), (3, 4));
    }
}
