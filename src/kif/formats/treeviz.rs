//! Treeviz formatter for AST nodes
//!
//! One line per node, nesting drawn with box connectors, so a whole knowledge base can be
//! scanned quickly. Each line shows an icon, the node kind, its label and its range.
//!
//! Example:
//!
//!   ⧉ 1 formula
//!   └─ ☰ List (3) 0:0..0:17
//!     ├─ ◦ Atom instance 0:1..0:9
//!     ├─ ? Variable ?X 0:10..0:12
//!     └─ ◦ Atom Dog 0:13..0:16
//!
//! Icons
//!     List: ☰ (an unclosed list is marked ☷)
//!     Atom: ◦
//!     Variable: ?
//!     RowVariable: @
//!     Number: #
//!     String: "

use super::registry::{FormatError, Formatter};
use crate::kif::ast::{Node, Term};

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(nodes))
    }

    fn description(&self) -> &str {
        "Tree view with node kinds and source ranges"
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon(node: &Node) -> &'static str {
    match node {
        Node::List(list) if list.closed => "☰",
        Node::List(_) => "☷",
        Node::Term(leaf) => match leaf.term {
            Term::Atom(_) => "◦",
            Term::Variable(_) => "?",
            Term::RowVariable(_) => "@",
            Term::Number(_) => "#",
            Term::String(_) => "\"",
        },
    }
}

fn label(node: &Node) -> String {
    match node {
        Node::List(list) => format!("({})", list.children.len()),
        Node::Term(leaf) => truncate(leaf.term.text(), 30),
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {} {} {}\n",
        prefix,
        connector,
        icon(node),
        node.kind_name(),
        label(node),
        node.range()
    ));

    if let Node::List(list) = node {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        let child_count = list.children.len();
        for (i, child) in list.children.iter().enumerate() {
            format_node(child, &child_prefix, i == child_count - 1, output);
        }
    }
}

pub fn to_treeviz_str(nodes: &[Node]) -> String {
    let noun = if nodes.len() == 1 { "formula" } else { "formulas" };
    let mut output = format!("⧉ {} {}\n", nodes.len(), noun);
    for (i, node) in nodes.iter().enumerate() {
        format_node(node, "", i == nodes.len() - 1, &mut output);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kif::parsing::parse_source;

    #[test]
    fn test_treeviz_layout() {
        let output = parse_source("(instance ?X Dog)\n(p (q 1))", "t");
        insta::assert_snapshot!(to_treeviz_str(&output.nodes), @r###"
        ⧉ 2 formulas
        ├─ ☰ List (3) 0:0..0:17
        │ ├─ ◦ Atom instance 0:1..0:9
        │ ├─ ? Variable ?X 0:10..0:12
        │ └─ ◦ Atom Dog 0:13..0:16
        └─ ☰ List (2) 1:0..1:9
          ├─ ◦ Atom p 1:1..1:2
          └─ ☰ List (2) 1:3..1:8
            ├─ ◦ Atom q 1:4..1:5
            └─ # Number 1 1:6..1:7
        "###);
    }

    #[test]
    fn test_unclosed_list_icon() {
        let output = parse_source("(p a", "t");
        assert!(to_treeviz_str(&output.nodes).contains("☷ List (2)"));
    }
}
