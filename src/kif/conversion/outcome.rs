//! Per-formula outcomes and batch results

use super::document::Role;
use crate::kif::translation::TranslationError;
use serde::Serialize;
use std::fmt;

/// Why a formula produced no axiom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Rejected as beyond first-order logic
    HigherOrderConstruct(TranslationError),
    /// Any other translation error
    TranslationFailure(TranslationError),
    /// Lexing or parsing failed, or the text did not hold exactly one formula
    ParseFailure(String),
    /// Headed by an excluded (documentation/presentation) predicate
    Filtered,
    /// Translated to the same body as an earlier formula
    DuplicateOfExisting,
}

impl From<TranslationError> for SkipReason {
    fn from(error: TranslationError) -> Self {
        if error.is_higher_order() {
            SkipReason::HigherOrderConstruct(error)
        } else {
            SkipReason::TranslationFailure(error)
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::HigherOrderConstruct(error) => write!(f, "higher-order: {}", error),
            SkipReason::TranslationFailure(error) => write!(f, "translation failed: {}", error),
            SkipReason::ParseFailure(message) => write!(f, "parse failed: {}", message),
            SkipReason::Filtered => f.write_str("filtered"),
            SkipReason::DuplicateOfExisting => f.write_str("duplicate"),
        }
    }
}

/// What happened to one input formula
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaOutcome {
    Emitted { name: String },
    Skipped(SkipReason),
}

/// A failed input with its 0-based position in the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFormula {
    pub index: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub total: usize,
    pub axioms_written: usize,
    pub filtered: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// The conjecture or question of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalOutcome {
    Emitted {
        name: String,
        role: Role,
        body: String,
    },
    Failed(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// The complete TPTP document
    pub document: String,
    pub axiom_count: usize,
    /// Failed inputs only; filtered and duplicate inputs are counted in `stats`
    pub skipped: Vec<SkippedFormula>,
    /// One outcome per input, in input order
    pub outcomes: Vec<FormulaOutcome>,
    pub stats: BatchStats,
    pub goal: Option<GoalOutcome>,
}
