//! Abstract syntax tree for SUO-KIF
//!
//!     A KIF file is a sequence of S-expressions. The tree has exactly two shapes:
//!
//!     List:
//!         An ordered sequence of child nodes between parentheses. `()` is a valid list with
//!         no children. A list whose closing parenthesis never arrived is still materialized,
//!         with `closed == false`, so diagnostics have a range to attach to.
//!
//!     Term:
//!         A leaf: an atom (constant, relation or function symbol), a variable `?X`, a row
//!         variable `@ROW`, a number literal or a string literal.
//!
//!     Every node carries a [Range]. Variables keep their `?`/`@` prefix in the stored name;
//!     string values are stored unquoted with escapes resolved.

pub mod range;

pub use range::{Position, Range, SourceLocation};

use serde::Serialize;

/// A parsed S-expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    List(ListNode),
    Term(TermNode),
}

/// A parenthesized list of nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListNode {
    pub children: Vec<Node>,
    pub range: Range,
    pub closed: bool,
}

/// A leaf node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermNode {
    pub term: Term,
    pub range: Range,
}

/// The leaf variants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Term {
    Atom(String),
    Variable(String),
    RowVariable(String),
    Number(String),
    String(String),
}

impl Term {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Atom(_) => "Atom",
            Term::Variable(_) => "Variable",
            Term::RowVariable(_) => "RowVariable",
            Term::Number(_) => "Number",
            Term::String(_) => "String",
        }
    }

    /// The stored text (symbol, prefixed variable name, literal or unquoted string)
    pub fn text(&self) -> &str {
        match self {
            Term::Atom(s)
            | Term::Variable(s)
            | Term::RowVariable(s)
            | Term::Number(s)
            | Term::String(s) => s,
        }
    }

    /// Variable name, for both ordinary and row variables
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) | Term::RowVariable(name) => Some(name),
            _ => None,
        }
    }
}

impl Node {
    /// Build a closed list node
    pub fn list(children: Vec<Node>, range: Range) -> Self {
        Node::List(ListNode {
            children,
            range,
            closed: true,
        })
    }

    pub fn term(term: Term, range: Range) -> Self {
        Node::Term(TermNode { term, range })
    }

    pub fn range(&self) -> &Range {
        match self {
            Node::List(list) => &list.range,
            Node::Term(term) => &term.range,
        }
    }

    pub fn start_offset(&self) -> usize {
        self.range().start_offset()
    }

    pub fn end_offset(&self) -> usize {
        self.range().end_offset()
    }

    pub fn as_list(&self) -> Option<&ListNode> {
        match self {
            Node::List(list) => Some(list),
            Node::Term(_) => None,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Node::Term(node) => Some(&node.term),
            Node::List(_) => None,
        }
    }

    /// The symbol of an atom leaf
    pub fn as_atom(&self) -> Option<&str> {
        match self.as_term()? {
            Term::Atom(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Short kind label used in diagnostics and tree dumps
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::List(_) => "List",
            Node::Term(node) => node.term.kind_name(),
        }
    }

    /// Compare shape and leaf values, ignoring source ranges
    pub fn same_structure(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::List(a), Node::List(b)) => {
                a.children.len() == b.children.len()
                    && a
                        .children
                        .iter()
                        .zip(&b.children)
                        .all(|(x, y)| x.same_structure(y))
            }
            (Node::Term(a), Node::Term(b)) => a.term == b.term,
            _ => false,
        }
    }
}
