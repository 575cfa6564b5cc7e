//! Canonical KIF printer
//!
//! Prints nodes back as S-expressions: single spaces between children, no comments, strings
//! re-quoted with `"` and `\` escaped. Parsing the output yields the same tree shape, which
//! makes this the reference for round-trip checks.

use super::registry::{FormatError, Formatter};
use crate::kif::ast::{Node, Term};

pub struct KifFormatter;

impl Formatter for KifFormatter {
    fn name(&self) -> &str {
        "kif"
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(to_kif_str(nodes))
    }

    fn description(&self) -> &str {
        "Canonical S-expressions, one top-level formula per line"
    }
}

/// Print all nodes, one per line
pub fn to_kif_str(nodes: &[Node]) -> String {
    let mut output = String::new();
    for node in nodes {
        write_node(node, &mut output);
        output.push('\n');
    }
    output
}

/// Print a single node
pub fn to_kif(node: &Node) -> String {
    let mut output = String::new();
    write_node(node, &mut output);
    output
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::List(list) => {
            out.push('(');
            for (i, child) in list.children.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_node(child, out);
            }
            out.push(')');
        }
        Node::Term(leaf) => match &leaf.term {
            Term::String(value) => {
                out.push('"');
                for c in value.chars() {
                    if matches!(c, '"' | '\\') {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push('"');
            }
            other => out.push_str(other.text()),
        },
    }
}
