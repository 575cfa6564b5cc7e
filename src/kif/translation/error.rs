//! Translation errors
//!
//! A translation error rejects one formula. The batch converter records it against that
//! formula and moves on.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A connective, quantifier or equality used where a term is required
    #[error("formula `{head}` used as a term")]
    FormulaAsTerm { head: String },

    /// A relation applied inside a term position
    #[error("predicate `{head}` used as a term")]
    PredicateAsTerm { head: String },

    /// A list whose head is not a symbol or variable
    #[error("list headed by {found} instead of a symbol")]
    NonSymbolHead { found: String },

    #[error("`{operator}` expects {expected} operand(s), found {found}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        found: usize,
    },

    #[error("malformed `{quantifier}`: {found}")]
    MalformedQuantifier { quantifier: String, found: String },

    #[error("string literals are disabled")]
    DisallowedString,

    #[error("empty list")]
    EmptyList,
}

impl TranslationError {
    /// Check if the error marks a construct beyond first-order logic
    pub fn is_higher_order(&self) -> bool {
        matches!(
            self,
            TranslationError::FormulaAsTerm { .. }
                | TranslationError::PredicateAsTerm { .. }
                | TranslationError::NonSymbolHead { .. }
        )
    }
}
