//! Lexer output and lexical errors
//!
//! Lexical errors never stop tokenization. They are collected next to the token stream so a
//! single bad word or a runaway string does not hide the rest of a file from the parser.

use crate::kif::ast::range::Position;
use crate::kif::token::Token;
use thiserror::Error;

/// Recoverable lexical errors, collected in source order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A `"` was opened and the input ended before it was closed
    #[error("unterminated string starting at {position}")]
    UnterminatedString { offset: usize, position: Position },

    /// The character after a `?`/`@` prefix, or the first character of an atom, is not an
    /// ASCII letter
    #[error("illegal leading character {found:?} in `{text}` at {position}")]
    IllegalLeadingCharacter {
        text: String,
        found: char,
        offset: usize,
        position: Position,
    },

    /// Input the core lexer could not match at all
    #[error("unexpected input `{text}` at {position}")]
    UnexpectedCharacter {
        text: String,
        offset: usize,
        position: Position,
    },
}

impl LexError {
    /// Byte offset the error is reported at
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedString { offset, .. }
            | LexError::IllegalLeadingCharacter { offset, .. }
            | LexError::UnexpectedCharacter { offset, .. } => *offset,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            LexError::UnterminatedString { position, .. }
            | LexError::IllegalLeadingCharacter { position, .. }
            | LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

/// Tokens plus every lexical error found while producing them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexerOutput {
    /// True when tokenization produced no errors
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
