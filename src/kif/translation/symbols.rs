//! Symbol tables
//!
//!     Fixed vocabularies the translator consults. The tables are immutable lazy statics,
//!     shared by every translation.
//!
//!     Prefixes keep translated names out of each other's way and out of the TPTP reserved
//!     namespace:
//!
//!         s__     ontology symbols
//!         V__     variables
//!         n__     hidden numbers (a leading minus becomes neg_)
//!         str__   string literals
//!         __m     suffix for a relation mentioned as an individual

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub const TERM_PREFIX: &str = "s__";
pub const VARIABLE_PREFIX: &str = "V__";
pub const NUMBER_PREFIX: &str = "n__";
pub const NEGATIVE_MARKER: &str = "neg_";
pub const STRING_PREFIX: &str = "str__";
pub const MENTION_SUFFIX: &str = "__m";

/// Longest encoded string body, before the prefix
pub const MAX_STRING_LENGTH: usize = 64;

/// Relation used to assert a formula-position variable or variable-headed literal
pub const HOLDS: &str = "holds";
/// Function used to reify applications that are not first-order
pub const APPLY: &str = "apply";

/// Logical connectives and quantifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
    Not,
    Implies,
    Iff,
    Forall,
    Exists,
}

impl Connective {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        LOGICAL_OPERATORS.get(symbol).copied()
    }

    /// The TPTP token for this connective
    pub fn tptp(&self) -> &'static str {
        match self {
            Connective::And => "&",
            Connective::Or => "|",
            Connective::Not => "~",
            Connective::Implies => "=>",
            Connective::Iff => "<=>",
            Connective::Forall => "!",
            Connective::Exists => "?",
        }
    }

    pub fn kif(&self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
            Connective::Not => "not",
            Connective::Implies => "=>",
            Connective::Iff => "<=>",
            Connective::Forall => "forall",
            Connective::Exists => "exists",
        }
    }
}

pub static LOGICAL_OPERATORS: Lazy<HashMap<&'static str, Connective>> = Lazy::new(|| {
    HashMap::from([
        ("and", Connective::And),
        ("or", Connective::Or),
        ("not", Connective::Not),
        ("=>", Connective::Implies),
        ("<=>", Connective::Iff),
        ("forall", Connective::Forall),
        ("exists", Connective::Exists),
    ])
});

pub static COMPARISON_OPERATORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("greaterThan", "$greater"),
        ("greaterThanOrEqualTo", "$greatereq"),
        ("lessThan", "$less"),
        ("lessThanOrEqualTo", "$lesseq"),
    ])
});

pub static MATH_FUNCTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AdditionFn", "$sum"),
        ("SubtractionFn", "$difference"),
        ("MultiplicationFn", "$product"),
        ("DivisionFn", "$quotient"),
        ("FloorFn", "$floor"),
        ("CeilingFn", "$ceiling"),
        ("RoundFn", "$round"),
    ])
});

pub static BOOLEAN_CONSTANTS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("True", "$true"), ("False", "$false")]));

/// Predicates whose formulas carry documentation or presentation data, never logic
pub static EXCLUDED_PREDICATES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "documentation",
        "format",
        "termFormat",
        "domain",
        "externalImage",
        "comment",
        "lexicon",
        "abbreviation",
        "conventionalShortName",
        "conventionalLongName",
        "relatedExternalConcept",
        "synonymousExternalConcept",
        "formerName",
    ])
});

const EQUALITY_SYMBOLS: [&str; 2] = ["=", "equal"];

pub fn is_equality(symbol: &str) -> bool {
    EQUALITY_SYMBOLS.contains(&symbol)
}

/// Connectives and equality: symbols that build formulas, not terms
pub fn is_reserved(symbol: &str) -> bool {
    LOGICAL_OPERATORS.contains_key(symbol) || is_equality(symbol)
}

/// By SUO-KIF convention relations are spelled lowercase-initial, individuals and
/// functions uppercase-initial
pub fn is_relation_name(symbol: &str) -> bool {
    symbol.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

pub fn is_excluded(symbol: &str) -> bool {
    EXCLUDED_PREDICATES.contains(symbol)
}

/// Interpreted TPTP symbol for an applied head, if any
pub fn interpreted_symbol(symbol: &str) -> Option<&'static str> {
    COMPARISON_OPERATORS
        .get(symbol)
        .or_else(|| MATH_FUNCTIONS.get(symbol))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connectives() {
        assert_eq!(Connective::from_symbol("=>"), Some(Connective::Implies));
        assert_eq!(Connective::from_symbol("instance"), None);
        assert_eq!(Connective::Exists.tptp(), "?");
    }

    #[test]
    fn test_reserved_symbols() {
        assert!(is_reserved("and"));
        assert!(is_reserved("equal"));
        assert!(is_reserved("="));
        assert!(!is_reserved("instance"));
    }

    #[test]
    fn test_relation_names() {
        assert!(is_relation_name("instance"));
        assert!(!is_relation_name("Human"));
        assert!(!is_relation_name("=>"));
    }

    #[test]
    fn test_interpreted_symbols() {
        assert_eq!(interpreted_symbol("lessThan"), Some("$less"));
        assert_eq!(interpreted_symbol("AdditionFn"), Some("$sum"));
        assert_eq!(interpreted_symbol("instance"), None);
    }
}
