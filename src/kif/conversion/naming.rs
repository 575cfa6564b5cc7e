//! Axiom names
//!
//! Names read as `<mnemonic>_<n>`, where the mnemonic hints at the formula's shape and `n`
//! counts emitted axioms from 1. The counter makes every name in a batch unique.

use crate::kif::ast::Node;
use crate::kif::formula::{arguments_from, head};

#[derive(Debug, Clone)]
pub struct AxiomNamer {
    next: usize,
}

impl Default for AxiomNamer {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl AxiomNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the next emitted axiom
    pub fn next_name(&mut self, node: &Node) -> String {
        let name = format!("{}_{}", mnemonic(node), self.next);
        self.next += 1;
        name
    }
}

/// Short shape description of a formula
pub fn mnemonic(node: &Node) -> String {
    let head_symbol = head(node).and_then(Node::as_atom);
    let first_argument = arguments_from(node, 1)
        .and_then(<[Node]>::first)
        .and_then(Node::as_atom);

    match head_symbol {
        Some(relation @ ("subclass" | "instance")) => match first_argument {
            Some(subject) => format!("{}_{}", relation, sanitize(subject)),
            None => relation.to_string(),
        },
        Some("=>") => "rule".to_string(),
        Some("<=>") => "equivalence".to_string(),
        Some("forall" | "exists") => "quantified".to_string(),
        _ => "axiom".to_string(),
    }
}

fn sanitize(symbol: &str) -> String {
    symbol
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kif::formula::Formula;

    fn name_of(text: &str) -> String {
        mnemonic(Formula::parse(text).unwrap().node())
    }

    #[test]
    fn test_mnemonics() {
        assert_eq!(name_of("(subclass Dog Animal)"), "subclass_Dog");
        assert_eq!(name_of("(instance Fido-1 Dog)"), "instance_Fido_1");
        assert_eq!(name_of("(instance ?X Dog)"), "instance");
        assert_eq!(name_of("(=> (p A) (q A))"), "rule");
        assert_eq!(name_of("(<=> (p A) (q A))"), "equivalence");
        assert_eq!(name_of("(exists (?X) (p ?X))"), "quantified");
        assert_eq!(name_of("(disjoint Cat Dog)"), "axiom");
    }

    #[test]
    fn test_counter_is_shared_across_mnemonics() {
        let mut namer = AxiomNamer::new();
        let first = Formula::parse("(subclass Dog Animal)").unwrap();
        let second = Formula::parse("(disjoint Cat Dog)").unwrap();
        assert_eq!(namer.next_name(first.node()), "subclass_Dog_1");
        assert_eq!(namer.next_name(second.node()), "axiom_2");
        assert_eq!(namer.next_name(first.node()), "subclass_Dog_3");
    }
}
