//! Word classification
//!
//!     logos hands back whole words; this module decides what a word is. The order matters:
//!     a word that reads as a signed decimal/exponent numeral is a Number even when it starts
//!     with `-` or `+`, then the `?` and `@` prefixes pick out variables and row variables,
//!     and everything else is an atom.
//!
//!     Atoms must start with an ASCII letter, with one exception: words made only of operator
//!     characters (`=`, `=>`, `<=>`, `+`, …) are legal atoms, since SUO-KIF spells its
//!     connectives and a few arithmetic relations that way.

use crate::kif::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("number pattern is valid")
});

const OPERATOR_CHARACTERS: &str = "=<>+-*/";

/// Classify a logos word into a token kind
pub fn classify_word(word: &str) -> TokenKind {
    if NUMBER_PATTERN.is_match(word) {
        TokenKind::Number
    } else if word.starts_with('?') {
        TokenKind::Variable
    } else if word.starts_with('@') {
        TokenKind::RowVariable
    } else {
        TokenKind::Atom
    }
}

/// Check if a word is spelled entirely with operator characters
pub fn is_operator_atom(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| OPERATOR_CHARACTERS.contains(c))
}

/// Return the offending character if the word breaks the leading-letter rule
///
/// For variables this is the character after the prefix (or the prefix itself when nothing
/// follows it); for atoms it is the first character.
pub fn leading_violation(word: &str, kind: TokenKind) -> Option<char> {
    let mut chars = word.chars();
    let leading = match kind {
        TokenKind::Variable | TokenKind::RowVariable => {
            let prefix = chars.next()?;
            chars.next().unwrap_or(prefix)
        }
        TokenKind::Atom if is_operator_atom(word) => return None,
        TokenKind::Atom => chars.next()?,
        _ => return None,
    };

    if leading.is_ascii_alphabetic() {
        None
    } else {
        Some(leading)
    }
}
