//! Translation options
//!
//! Options are a small `Copy` value threaded through every call; nothing in the translator
//! reads global settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// TPTP output dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// First-order form
    #[default]
    Fof,
    /// Typed first-order form
    Tff,
    /// Typed higher-order form
    Thf,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Fof => "fof",
            Dialect::Tff => "tff",
            Dialect::Thf => "thf",
        }
    }

    /// Check if the dialect has interpreted arithmetic (`$sum`, `$less`, …)
    pub fn supports_arithmetic(&self) -> bool {
        !matches!(self, Dialect::Fof)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect `{0}` (expected fof, tff or thf)")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fof" => Ok(Dialect::Fof),
            "tff" => Ok(Dialect::Tff),
            "thf" => Ok(Dialect::Thf),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

/// Knobs for a translation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationOptions {
    /// Encode numbers as opaque `n__…` constants
    pub hide_numbers: bool,
    /// Prefix symbols with `s__`
    pub add_prefixes: bool,
    pub output_dialect: Dialect,
    /// Reject higher-order constructs instead of reifying them
    pub remove_hol: bool,
    /// Reject formulas containing string literals
    pub remove_strings: bool,
    /// Emit the source formula as a `%` comment before each axiom
    pub include_source_comments: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            hide_numbers: true,
            add_prefixes: true,
            output_dialect: Dialect::Fof,
            remove_hol: true,
            remove_strings: false,
            include_source_comments: false,
        }
    }
}

impl TranslationOptions {
    /// Interpreted arithmetic symbols are used only when numbers are visible and the dialect
    /// can express them
    pub fn arithmetic_enabled(&self) -> bool {
        self.output_dialect.supports_arithmetic() && !self.hide_numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TranslationOptions::default();
        assert!(options.hide_numbers);
        assert!(options.add_prefixes);
        assert!(options.remove_hol);
        assert!(!options.remove_strings);
        assert_eq!(options.output_dialect, Dialect::Fof);
        assert!(!options.arithmetic_enabled());
    }

    #[test]
    fn test_arithmetic_needs_dialect_and_visible_numbers() {
        let mut options = TranslationOptions {
            output_dialect: Dialect::Tff,
            ..Default::default()
        };
        assert!(!options.arithmetic_enabled());
        options.hide_numbers = false;
        assert!(options.arithmetic_enabled());
        options.output_dialect = Dialect::Fof;
        assert!(!options.arithmetic_enabled());
    }

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("THF".parse::<Dialect>(), Ok(Dialect::Thf));
        assert!("cnf".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let options: TranslationOptions =
            serde_json::from_str(r#"{"output_dialect": "tff", "hide_numbers": false}"#).unwrap();
        assert_eq!(options.output_dialect, Dialect::Tff);
        assert!(!options.hide_numbers);
        assert!(options.add_prefixes);
    }
}
