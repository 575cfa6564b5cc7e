//! Testing utilities
//!
//! Factories for building nodes without source text, a one-call parser for test input and
//! assertions for TPTP output.
//!
//! Node factories carry default ranges; compare trees built from them with
//! [`Node::same_structure`](crate::kif::ast::Node::same_structure), never with `==`.
//!
//!     let expected = list(vec![atom("instance"), var("?X"), atom("Dog")]);
//!     assert!(parse_one("(instance ?X Dog)").same_structure(&expected));
//!
//! TPTP bodies are compared with [`assert_tptp_eq`], which ignores whitespace so tests do
//! not depend on the printer's spacing. Whole documents go through [`assert_text_eq`],
//! which reports a line-by-line diff.

use crate::kif::ast::{Node, Range, Term};
use crate::kif::parsing::parse_source;

/// Parse text that must hold exactly one error-free formula
///
/// # Panics
///
/// Panics on lexical or parse errors, or when the text holds zero or several formulas.
pub fn parse_one(text: &str) -> Node {
    let output = parse_source(text, "test");
    assert!(
        !output.has_errors(),
        "Expected {:?} to parse cleanly, found: {:?}",
        text,
        output.error_messages()
    );
    assert_eq!(
        output.nodes.len(),
        1,
        "Expected exactly one formula in {:?}, found {}",
        text,
        output.nodes.len()
    );
    let mut nodes = output.nodes;
    nodes.remove(0)
}

pub fn atom(symbol: &str) -> Node {
    Node::term(Term::Atom(symbol.to_string()), Range::default())
}

/// A variable leaf; a leading `@` makes a row variable
pub fn var(name: &str) -> Node {
    let term = if name.starts_with('@') {
        Term::RowVariable(name.to_string())
    } else {
        Term::Variable(name.to_string())
    };
    Node::term(term, Range::default())
}

pub fn number(literal: &str) -> Node {
    Node::term(Term::Number(literal.to_string()), Range::default())
}

pub fn string(value: &str) -> Node {
    Node::term(Term::String(value.to_string()), Range::default())
}

pub fn list(children: Vec<Node>) -> Node {
    Node::list(children, Range::default())
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Assert two TPTP texts are equal up to whitespace
pub fn assert_tptp_eq(actual: &str, expected: &str) {
    assert_eq!(
        strip_whitespace(actual),
        strip_whitespace(expected),
        "TPTP mismatch\n  Expected: {expected}\n  Actual:   {actual}"
    );
}

/// Formula lines of a TPTP document (comments and blank lines dropped)
pub fn formula_lines(document: &str) -> Vec<&str> {
    document
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('%'))
        .collect()
}

/// Assert that two strings are equal, with a line-by-line diff on failure
pub fn assert_text_eq(expected: &str, actual: &str) {
    if expected == actual {
        return;
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();
    let mut diff_lines = Vec::new();

    for i in 0..expected_lines.len().max(actual_lines.len()) {
        match (expected_lines.get(i), actual_lines.get(i)) {
            (Some(exp), Some(act)) if exp == act => {}
            (Some(exp), Some(act)) => {
                diff_lines.push(format!("Line {}: MISMATCH", i + 1));
                diff_lines.push(format!("  Expected: {exp:?}"));
                diff_lines.push(format!("  Actual:   {act:?}"));
            }
            (Some(exp), None) => {
                diff_lines.push(format!("Line {}: MISSING in actual", i + 1));
                diff_lines.push(format!("  Expected: {exp:?}"));
            }
            (None, Some(act)) => {
                diff_lines.push(format!("Line {}: EXTRA in actual", i + 1));
                diff_lines.push(format!("  Actual:   {act:?}"));
            }
            (None, None) => {}
        }
    }

    if diff_lines.is_empty() {
        diff_lines.push("Texts differ only in trailing newlines".to_string());
    }
    panic!("Text mismatch:\n{}", diff_lines.join("\n"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_match_parsed_tree() {
        let expected = list(vec![
            atom("age"),
            var("?X"),
            number("42"),
            string("forty two"),
            var("@ROW"),
        ]);
        assert!(parse_one("(age ?X 42 \"forty two\" @ROW)").same_structure(&expected));
    }

    #[test]
    fn test_assert_tptp_eq_ignores_whitespace() {
        assert_tptp_eq("( ! [V__X] : (p(V__X)) )", "(![V__X]:(p(V__X)))");
    }

    #[test]
    #[should_panic(expected = "TPTP mismatch")]
    fn test_assert_tptp_eq_detects_difference() {
        assert_tptp_eq("p(a)", "p(b)");
    }

    #[test]
    fn test_formula_lines() {
        let document = "% header\n\nfof(a_1, axiom, (p)).\n% footer\n";
        assert_eq!(formula_lines(document), vec!["fof(a_1, axiom, (p))."]);
    }

    #[test]
    #[should_panic(expected = "Line 2: MISMATCH")]
    fn test_assert_text_eq_reports_line() {
        assert_text_eq("a\nb", "a\nc");
    }
}
