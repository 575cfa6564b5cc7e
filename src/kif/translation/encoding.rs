//! Symbol encoding
//!
//! Maps KIF leaves into the TPTP alphabet. Every function is total: any input text yields a
//! syntactically valid TPTP name or quoted atom.

use super::symbols::{
    MAX_STRING_LENGTH, MENTION_SUFFIX, NEGATIVE_MARKER, NUMBER_PREFIX, STRING_PREFIX,
    TERM_PREFIX, VARIABLE_PREFIX,
};
use once_cell::sync::Lazy;
use regex::Regex;

static LOWER_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-zA-Z0-9_]*$").expect("lower word pattern is valid"));

/// `?var-name` / `@ROW` to `V__VAR_NAME` / `V__ROW`
pub fn variable_symbol(name: &str) -> String {
    let bare = name.trim_start_matches(['?', '@']);
    let body: String = bare
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{VARIABLE_PREFIX}{body}")
}

/// Number literal, hidden as an opaque constant or kept verbatim
pub fn number_symbol(literal: &str, hide: bool) -> String {
    if !hide {
        return literal.to_string();
    }

    let (sign, digits) = match literal.strip_prefix('-') {
        Some(rest) => (NEGATIVE_MARKER, rest),
        None => ("", literal.strip_prefix('+').unwrap_or(literal)),
    };
    let body: String = digits
        .chars()
        .map(|c| if matches!(c, '.' | '+' | '-') { '_' } else { c })
        .collect();
    format!("{NUMBER_PREFIX}{sign}{body}")
}

/// String value (already unquoted) to a `str__` constant
pub fn string_symbol(value: &str) -> String {
    let body: String = value
        .chars()
        .take(MAX_STRING_LENGTH)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{STRING_PREFIX}{body}")
}

/// Ontology symbol, prefixed on request and quoted when it would not be a plain TPTP word
pub fn term_symbol(symbol: &str, add_prefix: bool) -> String {
    let name = if add_prefix {
        format!("{TERM_PREFIX}{symbol}")
    } else {
        symbol.to_string()
    };

    if LOWER_WORD.is_match(&name) {
        name
    } else {
        quote(&name)
    }
}

/// A relation used as an individual
pub fn mention_symbol(symbol: &str, add_prefix: bool) -> String {
    term_symbol(&format!("{symbol}{MENTION_SUFFIX}"), add_prefix)
}

fn quote(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('\'');
    for c in name.chars() {
        if matches!(c, '\\' | '\'') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
