//! Translation from SUO-KIF to TPTP
//!
//!     One parsed formula in, one TPTP formula body out (without the `fof(name, role, …).`
//!     wrapper, which the batch converter adds).
//!
//!     options:     [TranslationOptions] and the output [Dialect]
//!     symbols:     connective, comparison, arithmetic and exclusion tables
//!     encoding:    variables, numbers, strings and symbols into the TPTP alphabet
//!     translator:  the recursive translation and free-variable closure
//!     error:       [TranslationError]
//!
//!     Translation is pure. A failure is a value; the caller decides whether it skips the
//!     formula or aborts.

pub mod encoding;
pub mod error;
pub mod options;
pub mod symbols;
pub mod translator;

pub use error::TranslationError;
pub use options::{Dialect, TranslationOptions, UnknownDialect};
pub use translator::{translate_formula, translate_query, Translator};
