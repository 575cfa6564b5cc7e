//! Formula model
//!
//!     Read-only queries over parsed nodes. Nothing here allocates new nodes; the helpers
//!     borrow into the tree the parser built.
//!
//! Variables
//!
//!     All three collectors return sorted sets of prefixed names (`?X`, `@ROW`), so the
//!     closure the translator builds from them is stable across runs.
//!
//!         all:        every Variable and RowVariable leaf anywhere in the tree
//!         quantified: every variable listed in the variable list of a `forall`/`exists`
//!         free:       every variable with an occurrence no enclosing quantifier binds
//!
//!     Free is scoped: in `(and (p ?X) (forall (?X) (q ?X)))` the first `?X` is free even
//!     though a sibling quantifies the same name.
//!
//!     [Formula] wraps one parsed node for call sites that start from text. The [text]
//!     submodule answers the cheapest questions (head symbol, is it a list) without parsing.

pub mod text;

use crate::kif::ast::Node;
use crate::kif::parsing::parse_source;
use std::collections::BTreeSet;
use thiserror::Error;

/// Quantifier heads whose first argument binds variables
pub const QUANTIFIERS: [&str; 2] = ["forall", "exists"];

pub fn is_atom(node: &Node) -> bool {
    matches!(node, Node::Term(_))
}

pub fn is_list(node: &Node) -> bool {
    matches!(node, Node::List(_))
}

pub fn is_empty_list(node: &Node) -> bool {
    node.as_list().is_some_and(|list| list.children.is_empty())
}

/// First child of a non-empty list
pub fn head(node: &Node) -> Option<&Node> {
    node.as_list()?.children.first()
}

/// Children of a list from index `start` on
///
/// `None` for terms and for lists shorter than `start`; a list of exactly `start` children
/// gives an empty slice.
pub fn arguments_from(node: &Node, start: usize) -> Option<&[Node]> {
    node.as_list()?.children.get(start..)
}

pub fn collect_all_variables(node: &Node) -> BTreeSet<String> {
    let mut variables = BTreeSet::new();
    walk_variables(node, &mut variables);
    variables
}

pub fn collect_quantified_variables(node: &Node) -> BTreeSet<String> {
    let mut variables = BTreeSet::new();
    walk_quantified(node, &mut variables);
    variables
}

pub fn collect_free_variables(node: &Node) -> BTreeSet<String> {
    let mut variables = BTreeSet::new();
    walk_free(node, &mut Vec::new(), &mut variables);
    variables
}

fn walk_variables(node: &Node, out: &mut BTreeSet<String>) {
    match node {
        Node::Term(leaf) => {
            if let Some(name) = leaf.term.as_variable() {
                out.insert(name.to_string());
            }
        }
        Node::List(list) => list.children.iter().for_each(|child| walk_variables(child, out)),
    }
}

/// Variables bound by `node` when it is a quantifier with a variable list
fn bound_variables(node: &Node) -> Option<Vec<&str>> {
    let list = node.as_list()?;
    let symbol = list.children.first()?.as_atom()?;
    if !QUANTIFIERS.contains(&symbol) {
        return None;
    }
    let bound = list.children.get(1)?.as_list()?;
    Some(
        bound
            .children
            .iter()
            .filter_map(Node::as_term)
            .filter_map(|term| term.as_variable())
            .collect(),
    )
}

fn walk_quantified(node: &Node, out: &mut BTreeSet<String>) {
    let Some(list) = node.as_list() else {
        return;
    };
    if let Some(bound) = bound_variables(node) {
        out.extend(bound.into_iter().map(str::to_string));
    }
    list.children.iter().for_each(|child| walk_quantified(child, out));
}

fn walk_free<'n>(node: &'n Node, scope: &mut Vec<&'n str>, out: &mut BTreeSet<String>) {
    let list = match node {
        Node::Term(leaf) => {
            if let Some(name) = leaf.term.as_variable() {
                if !scope.contains(&name) {
                    out.insert(name.to_string());
                }
            }
            return;
        }
        Node::List(list) => list,
    };

    match bound_variables(node) {
        Some(bound) => {
            let depth = scope.len();
            scope.extend(bound);
            list.children
                .iter()
                .skip(2)
                .for_each(|child| walk_free(child, scope, out));
            scope.truncate(depth);
        }
        None => list
            .children
            .iter()
            .for_each(|child| walk_free(child, scope, out)),
    }
}

/// Why a text could not be read as exactly one formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("lexical error: {0}")]
    Lex(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("no formula found")]
    Empty,

    #[error("expected one formula, found {0}")]
    Multiple(usize),
}

/// A single formula parsed from text
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    node: Node,
}

impl Formula {
    /// Parse `text`, which must hold exactly one well-formed S-expression
    pub fn parse(text: &str) -> Result<Self, FormulaError> {
        let output = parse_source(text, "formula");
        if let Some(error) = output.lex_errors.first() {
            return Err(FormulaError::Lex(error.to_string()));
        }
        if let Some(error) = output.parse_errors.first() {
            return Err(FormulaError::Parse(error.to_string()));
        }

        let mut nodes = output.nodes;
        match nodes.len() {
            0 => Err(FormulaError::Empty),
            1 => Ok(Self {
                node: nodes.remove(0),
            }),
            n => Err(FormulaError::Multiple(n)),
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Head atom of the formula, if it is a list headed by an atom
    pub fn head_symbol(&self) -> Option<&str> {
        head(&self.node)?.as_atom()
    }

    pub fn is_list(&self) -> bool {
        is_list(&self.node)
    }

    pub fn arguments(&self) -> &[Node] {
        arguments_from(&self.node, 1).unwrap_or(&[])
    }

    pub fn all_variables(&self) -> BTreeSet<String> {
        collect_all_variables(&self.node)
    }

    pub fn quantified_variables(&self) -> BTreeSet<String> {
        collect_quantified_variables(&self.node)
    }

    pub fn free_variables(&self) -> BTreeSet<String> {
        collect_free_variables(&self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_shape_queries() {
        let formula = Formula::parse("(instance Foo Bar)").unwrap();
        let node = formula.node();
        assert!(is_list(node));
        assert!(!is_atom(node));
        assert!(!is_empty_list(node));
        assert_eq!(head(node).and_then(Node::as_atom), Some("instance"));
        assert_eq!(arguments_from(node, 1).map(<[Node]>::len), Some(2));
        assert_eq!(arguments_from(node, 3).map(<[Node]>::len), Some(0));
        assert_eq!(arguments_from(node, 4), None);
    }

    #[test]
    fn test_empty_list_queries() {
        let formula = Formula::parse("()").unwrap();
        assert!(is_empty_list(formula.node()));
        assert_eq!(head(formula.node()), None);
        assert_eq!(formula.head_symbol(), None);
    }

    #[test]
    fn test_free_and_quantified_variables() {
        let formula =
            Formula::parse("(=> (instance ?X Human) (exists (?Y) (parent ?X ?Y @ROW)))").unwrap();
        assert_eq!(names(&formula.all_variables()), vec!["?X", "?Y", "@ROW"]);
        assert_eq!(names(&formula.quantified_variables()), vec!["?Y"]);
        assert_eq!(names(&formula.free_variables()), vec!["?X", "@ROW"]);
    }

    #[test]
    fn test_sibling_quantifier_does_not_bind() {
        let formula = Formula::parse("(and (p ?X) (forall (?X) (q ?X)))").unwrap();
        assert_eq!(names(&formula.free_variables()), vec!["?X"]);
        assert_eq!(names(&formula.quantified_variables()), vec!["?X"]);
    }

    #[test]
    fn test_nested_scopes() {
        let formula =
            Formula::parse("(forall (?X) (and (p ?X ?Y) (exists (?Y) (q ?Y ?Z))))").unwrap();
        assert_eq!(names(&formula.free_variables()), vec!["?Y", "?Z"]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Formula::parse("  ; nothing"), Err(FormulaError::Empty));
        assert_eq!(Formula::parse("(p a) (q b)"), Err(FormulaError::Multiple(2)));
        assert!(matches!(Formula::parse("(p a"), Err(FormulaError::Parse(_))));
        assert!(matches!(Formula::parse("(p ?1)"), Err(FormulaError::Lex(_))));
    }
}
