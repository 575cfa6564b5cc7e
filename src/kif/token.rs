//! Core token types shared across the lexer, parser, and tooling.
//!
//! Token Layers
//!
//!     Core Tokens:
//!         Character level classes produced by the logos DFA: parentheses, strings (terminated
//!         or not) and words. Whitespace and `;` comments are skipped by logos and never
//!         surface. See [core](core).
//!
//!     Positioned Tokens:
//!         A core token after word classification (number, variable, row variable, atom),
//!         carrying its exact source text, byte offset, line, column and the id of the source
//!         it came from. This is what the parser consumes.

pub mod core;

pub use core::{CoreToken, Token, TokenKind};
