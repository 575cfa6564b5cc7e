//! Lexer
//!
//!     This module turns SUO-KIF source text into positioned tokens.
//!
//! The Lexing Pipeline
//!
//!     1. Core tokenization using logos. See [base_tokenization](base_tokenization).
//!        Whitespace and `;` comments are skipped here and never produce tokens.
//!
//!     2. Word classification. See [classification](classification). Each logos word becomes
//!        a Number, Variable, RowVariable or Atom, and words that break the leading-letter
//!        rule are reported.
//!
//!     3. Positioning. Byte offsets are converted to 0-based line/column pairs through
//!        [SourceLocation](crate::kif::ast::range::SourceLocation).
//!
//!     Errors never abort the pass. An unterminated string still yields its partial String
//!     token, and an ill-formed word is still emitted with its best classification, so the
//!     parser always sees the complete stream.
//!
//!     `tokenize` is pure: the same text always yields the same tokens and errors.

pub mod base_tokenization;
pub mod classification;
pub mod common;

pub use common::{LexError, LexerOutput};

use crate::kif::ast::range::SourceLocation;
use crate::kif::token::{CoreToken, Token, TokenKind};
use std::sync::Arc;

/// Tokenize `text`, tagging every token with `source_id`
pub fn tokenize(text: &str, source_id: &str) -> LexerOutput {
    let source_id: Arc<str> = Arc::from(source_id);
    let locator = SourceLocation::new(text);
    let mut output = LexerOutput::default();

    for (result, span) in base_tokenization::tokenize(text) {
        let position = locator.byte_to_position(span.start);

        // Unmatched input may end inside a multi-byte character
        let Some(slice) = text.get(span.clone()) else {
            output.errors.push(LexError::UnexpectedCharacter {
                text: String::from_utf8_lossy(&text.as_bytes()[span.clone()]).into_owned(),
                offset: span.start,
                position,
            });
            continue;
        };

        let kind = match result {
            Ok(CoreToken::OpenParen) => TokenKind::LParen,
            Ok(CoreToken::CloseParen) => TokenKind::RParen,
            Ok(CoreToken::String) => TokenKind::String,
            Ok(CoreToken::UnterminatedString) => {
                output.errors.push(LexError::UnterminatedString {
                    offset: span.start,
                    position,
                });
                TokenKind::String
            }
            Ok(CoreToken::Word) => {
                let kind = classification::classify_word(slice);
                if let Some(found) = classification::leading_violation(slice, kind) {
                    output.errors.push(LexError::IllegalLeadingCharacter {
                        text: slice.to_string(),
                        found,
                        offset: span.start,
                        position,
                    });
                }
                kind
            }
            Err(()) => {
                output.errors.push(LexError::UnexpectedCharacter {
                    text: slice.to_string(),
                    offset: span.start,
                    position,
                });
                continue;
            }
        };

        output.tokens.push(Token {
            kind,
            text: slice.to_string(),
            line: position.line,
            column: position.column,
            offset: span.start,
            source_id: Arc::clone(&source_id),
        });
    }

    output
}
