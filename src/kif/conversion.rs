//! Knowledge base conversion
//!
//!     Turns a sequence of formula strings into one TPTP document of named, deduplicated
//!     axioms, plus an optional conjecture or question.
//!
//!     batch:     [BatchConverter] and [convert_batch]
//!     naming:    axiom names
//!     document:  header, formula lines and footer
//!     outcome:   per-formula outcomes, skip reasons and statistics

pub mod batch;
pub mod document;
pub mod naming;
pub mod outcome;

pub use batch::{convert_batch, BatchConverter, Goal, DEFAULT_KB_NAME};
pub use document::Role;
pub use outcome::{
    BatchResult, BatchStats, FormulaOutcome, GoalOutcome, SkipReason, SkippedFormula,
};
