//! Parse errors
//!
//! Both variants are recoverable: the parser records them and keeps going.

use crate::kif::ast::range::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended (or a new top-level formula began) before the list opened here was closed
    #[error("unclosed parenthesis opened at {position}")]
    UnclosedParen { offset: usize, position: Position },

    /// A `)` with no open list
    #[error("dangling closing parenthesis at {position}")]
    DanglingParen { offset: usize, position: Position },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnclosedParen { offset, .. } | ParseError::DanglingParen { offset, .. } => {
                *offset
            }
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::UnclosedParen { position, .. }
            | ParseError::DanglingParen { position, .. } => *position,
        }
    }
}
