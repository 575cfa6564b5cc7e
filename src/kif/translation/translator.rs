//! The translator
//!
//!     A direct recursion over the node tree. Every node is translated in one of two
//!     positions:
//!
//!         Formula:  the node must denote a truth value (top level, connective operands,
//!                   quantifier bodies)
//!         Argument: the node must denote an individual (arguments of an application,
//!                   operands of equality)
//!
//!     Anything that can only denote a truth value (connectives, quantifiers, equality, a
//!     relation application) is rejected in argument position, since first-order logic has
//!     no formulas inside terms. With `remove_hol` off, relation applications in argument
//!     position are reified through `apply` instead.
//!
//!     The closing step binds every free variable: universally for axioms, existentially for
//!     queries.

use super::encoding::{mention_symbol, number_symbol, string_symbol, term_symbol, variable_symbol};
use super::error::TranslationError;
use super::options::TranslationOptions;
use super::symbols::{self, Connective, APPLY, BOOLEAN_CONSTANTS, HOLDS};
use crate::kif::ast::{Node, Term};
use crate::kif::formula::collect_free_variables;
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, TranslationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Formula,
    Argument,
}

/// Translates nodes under a fixed set of options
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    options: TranslationOptions,
}

impl Translator {
    pub fn new(options: TranslationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranslationOptions {
        &self.options
    }

    /// Translate an axiom; free variables are universally closed
    pub fn translate_formula(&self, node: &Node) -> Result<String> {
        self.closed(node, Connective::Forall)
    }

    /// Translate a query; free variables are existentially closed
    pub fn translate_query(&self, node: &Node) -> Result<String> {
        self.closed(node, Connective::Exists)
    }

    fn closed(&self, node: &Node, quantifier: Connective) -> Result<String> {
        let body = self.translate(node, Context::Formula)?;
        let free: BTreeSet<String> = collect_free_variables(node)
            .iter()
            .map(|name| variable_symbol(name))
            .collect();

        if free.is_empty() {
            return Ok(body);
        }

        let bound: Vec<String> = free.into_iter().collect();
        Ok(format!(
            "( {} [{}] : ({}) )",
            quantifier.tptp(),
            bound.join(","),
            body
        ))
    }

    fn translate(&self, node: &Node, context: Context) -> Result<String> {
        match node {
            Node::Term(leaf) => self.translate_term(&leaf.term, context),
            Node::List(list) => self.translate_list(&list.children, context),
        }
    }

    fn translate_term(&self, term: &Term, context: Context) -> Result<String> {
        match term {
            Term::Variable(name) | Term::RowVariable(name) => {
                let variable = variable_symbol(name);
                Ok(match context {
                    Context::Argument => variable,
                    Context::Formula => self.application(&self.symbol(HOLDS), &[variable]),
                })
            }
            Term::Number(literal) => Ok(number_symbol(literal, self.options.hide_numbers)),
            Term::String(value) => {
                if self.options.remove_strings {
                    Err(TranslationError::DisallowedString)
                } else {
                    Ok(string_symbol(value))
                }
            }
            Term::Atom(symbol) => self.translate_atom(symbol, context),
        }
    }

    fn translate_atom(&self, symbol: &str, context: Context) -> Result<String> {
        if symbols::is_reserved(symbol) {
            return match context {
                Context::Argument => Err(TranslationError::FormulaAsTerm {
                    head: symbol.to_string(),
                }),
                Context::Formula => self.translate_symbol_list(symbol, &[], context),
            };
        }

        match context {
            Context::Formula => Ok(BOOLEAN_CONSTANTS
                .get(symbol)
                .map(|constant| constant.to_string())
                .unwrap_or_else(|| self.symbol(symbol))),
            Context::Argument if symbols::is_relation_name(symbol) => {
                Ok(mention_symbol(symbol, self.options.add_prefixes))
            }
            Context::Argument => Ok(self.symbol(symbol)),
        }
    }

    fn translate_list(&self, children: &[Node], context: Context) -> Result<String> {
        let (head, rest) = children.split_first().ok_or(TranslationError::EmptyList)?;

        match head {
            Node::Term(leaf) => match &leaf.term {
                Term::Atom(symbol) => self.translate_symbol_list(symbol, rest, context),
                Term::Variable(name) | Term::RowVariable(name) => {
                    let mut arguments = vec![variable_symbol(name)];
                    arguments.extend(self.arguments(rest)?);
                    let functor = match context {
                        Context::Formula => HOLDS,
                        Context::Argument => APPLY,
                    };
                    Ok(self.application(&self.symbol(functor), &arguments))
                }
                other => Err(TranslationError::NonSymbolHead {
                    found: other.kind_name().to_string(),
                }),
            },
            Node::List(_) => Err(TranslationError::NonSymbolHead {
                found: head.kind_name().to_string(),
            }),
        }
    }

    fn translate_symbol_list(
        &self,
        symbol: &str,
        operands: &[Node],
        context: Context,
    ) -> Result<String> {
        if symbols::is_reserved(symbol) {
            if context == Context::Argument {
                return Err(TranslationError::FormulaAsTerm {
                    head: symbol.to_string(),
                });
            }
            return match Connective::from_symbol(symbol) {
                Some(connective) => self.translate_connective(connective, operands),
                None => self.translate_equality(symbol, operands),
            };
        }

        let arguments = self.arguments(operands)?;

        if context == Context::Argument && symbols::is_relation_name(symbol) {
            if self.options.remove_hol {
                return Err(TranslationError::PredicateAsTerm {
                    head: symbol.to_string(),
                });
            }
            let mut reified = vec![mention_symbol(symbol, self.options.add_prefixes)];
            reified.extend(arguments);
            return Ok(self.application(&self.symbol(APPLY), &reified));
        }

        let functor = match symbols::interpreted_symbol(symbol) {
            Some(interpreted) if self.options.arithmetic_enabled() => interpreted.to_string(),
            _ => self.symbol(symbol),
        };
        Ok(self.application(&functor, &arguments))
    }

    fn translate_connective(&self, connective: Connective, operands: &[Node]) -> Result<String> {
        match connective {
            Connective::Not => {
                let [operand] = self.exact::<1>(connective.kif(), operands)?;
                Ok(format!("~({})", self.translate(operand, Context::Formula)?))
            }
            Connective::And | Connective::Or => {
                let mut translated = operands
                    .iter()
                    .map(|operand| self.translate(operand, Context::Formula));
                let Some(first) = translated.next() else {
                    return Ok(match connective {
                        Connective::And => "$true",
                        _ => "$false",
                    }
                    .to_string());
                };
                translated.try_fold(first?, |acc, next| {
                    Ok(format!("({} {} {})", acc, connective.tptp(), next?))
                })
            }
            Connective::Implies | Connective::Iff => {
                let [left, right] = self.exact::<2>(connective.kif(), operands)?;
                Ok(format!(
                    "({} {} ({}))",
                    self.translate(left, Context::Formula)?,
                    connective.tptp(),
                    self.translate(right, Context::Formula)?
                ))
            }
            Connective::Forall | Connective::Exists => {
                let [bound, body] = self.exact::<2>(connective.kif(), operands)?;
                let variables = self.bound_variables(connective, bound)?;
                let body = self.translate(body, Context::Formula)?;
                if variables.is_empty() {
                    return Ok(body);
                }
                Ok(format!(
                    "({} [{}] : ({}))",
                    connective.tptp(),
                    variables.join(","),
                    body
                ))
            }
        }
    }

    fn translate_equality(&self, symbol: &str, operands: &[Node]) -> Result<String> {
        let [left, right] = self.exact::<2>(symbol, operands)?;
        Ok(format!(
            "({} = {})",
            self.translate(left, Context::Argument)?,
            self.translate(right, Context::Argument)?
        ))
    }

    fn bound_variables(&self, quantifier: Connective, bound: &Node) -> Result<Vec<String>> {
        let malformed = |found: String| TranslationError::MalformedQuantifier {
            quantifier: quantifier.kif().to_string(),
            found,
        };

        let list = bound
            .as_list()
            .ok_or_else(|| malformed(format!("variable list is a {}", bound.kind_name())))?;

        list.children
            .iter()
            .map(|child| {
                child
                    .as_term()
                    .and_then(Term::as_variable)
                    .map(variable_symbol)
                    .ok_or_else(|| malformed(format!("{} in variable list", child.kind_name())))
            })
            .collect()
    }

    fn arguments(&self, operands: &[Node]) -> Result<Vec<String>> {
        operands
            .iter()
            .map(|operand| self.translate(operand, Context::Argument))
            .collect()
    }

    fn exact<'n, const N: usize>(&self, operator: &str, operands: &'n [Node]) -> Result<&'n [Node; N]> {
        operands
            .try_into()
            .map_err(|_| TranslationError::ArityMismatch {
                operator: operator.to_string(),
                expected: N,
                found: operands.len(),
            })
    }

    fn symbol(&self, symbol: &str) -> String {
        term_symbol(symbol, self.options.add_prefixes)
    }

    fn application(&self, functor: &str, arguments: &[String]) -> String {
        if arguments.is_empty() {
            functor.to_string()
        } else {
            format!("{}({})", functor, arguments.join(","))
        }
    }
}

/// Translate one axiom under `options`
pub fn translate_formula(node: &Node, options: &TranslationOptions) -> Result<String> {
    Translator::new(*options).translate_formula(node)
}

/// Translate one query under `options`
pub fn translate_query(node: &Node, options: &TranslationOptions) -> Result<String> {
    Translator::new(*options).translate_query(node)
}
