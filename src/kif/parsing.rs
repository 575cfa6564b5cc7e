//! Parser
//!
//!     Recursive descent over the classified token stream. An LPAREN opens a list whose
//!     children accumulate until the matching RPAREN. The top level is a sequence of sibling
//!     formulas, not a single root.
//!
//! Recovery
//!
//!     Parsing never fails. It returns a best-effort node list together with every error
//!     found, so one malformed axiom cannot keep the rest of a file (or a knowledge base)
//!     from being processed:
//!
//!         - A stray RPAREN with no open list is skipped and reported as DanglingParen.
//!         - A list still open when input ends is returned as is (`closed == false`) and
//!           reported as UnclosedParen at its opening offset.
//!
//!     Each top-level formula is parsed strictly first: only a matching RPAREN closes a
//!     list, so well-formed input parses the same however it is indented. When a formula
//!     runs to the end of input with lists still open, that formula is parsed again with
//!     one more rule:
//!
//!         - A LPAREN in column 0 on a later line than the current top-level formula starts
//!           a new top-level formula. Every list still open is closed at that point and
//!           reported as UnclosedParen, so a missing `)` only damages its own formula.

pub mod error;

pub use error::ParseError;

use crate::kif::ast::{ListNode, Node, Position, Range, Term};
use crate::kif::lexing::{self, LexError};
use crate::kif::token::{Token, TokenKind};

/// Nodes plus every parse error found while building them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParserOutput {
    pub nodes: Vec<Node>,
    pub errors: Vec<ParseError>,
}

/// Result of lexing and parsing a source text in one go
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceOutput {
    pub nodes: Vec<Node>,
    pub lex_errors: Vec<LexError>,
    pub parse_errors: Vec<ParseError>,
}

impl SourceOutput {
    pub fn has_errors(&self) -> bool {
        !self.lex_errors.is_empty() || !self.parse_errors.is_empty()
    }

    /// All error messages in source order
    pub fn error_messages(&self) -> Vec<String> {
        let mut located: Vec<(usize, String)> = self
            .lex_errors
            .iter()
            .map(|e| (e.offset(), e.to_string()))
            .chain(self.parse_errors.iter().map(|e| (e.offset(), e.to_string())))
            .collect();
        located.sort_by_key(|(offset, _)| *offset);
        located.into_iter().map(|(_, message)| message).collect()
    }
}

/// Parse a token stream into top-level nodes
pub fn parse(tokens: &[Token]) -> ParserOutput {
    let mut parser = Parser::new(tokens);
    let nodes = parser.parse_top_level();
    ParserOutput {
        nodes,
        errors: parser.errors,
    }
}

/// Lex and parse `text` in one call
pub fn parse_source(text: &str, source_id: &str) -> SourceOutput {
    let lexed = lexing::tokenize(text, source_id);
    let parsed = parse(&lexed.tokens);
    SourceOutput {
        nodes: parsed.nodes,
        lex_errors: lexed.errors,
        parse_errors: parsed.errors,
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    errors: Vec<ParseError>,
    /// Close open lists at a column-0 LPAREN on a later line
    recover: bool,
    /// Line of the LPAREN that opened the current top-level formula
    formula_line: usize,
    /// End of the last consumed token
    last_end: (usize, Position),
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            cursor: 0,
            errors: Vec::new(),
            recover: false,
            formula_line: 0,
            last_end: (0, Position::default()),
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) {
        if let Some(token) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            let (line, column) = token.end_line_column();
            self.last_end = (token.end(), Position::new(line, column));
        }
    }

    fn parse_top_level(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();

        while let Some(token) = self.peek() {
            match leaf_term(token) {
                Some(term) => nodes.push(self.parse_term(token, term)),
                None if token.kind == TokenKind::LParen => {
                    nodes.push(self.parse_formula(token));
                }
                None => {
                    self.errors.push(ParseError::DanglingParen {
                        offset: token.offset,
                        position: start_position(token),
                    });
                    self.advance();
                }
            }
        }

        nodes
    }

    /// Parse a top-level list, retrying with recovery when it runs off the end of input
    fn parse_formula(&mut self, open: &'t Token) -> Node {
        self.formula_line = open.line;
        let (cursor, error_count, last_end) = (self.cursor, self.errors.len(), self.last_end);

        let node = self.parse_list(open);
        if node.as_list().map_or(true, |list| list.closed) {
            return node;
        }

        self.cursor = cursor;
        self.errors.truncate(error_count);
        self.last_end = last_end;
        self.recover = true;
        let node = self.parse_list(open);
        self.recover = false;
        node
    }

    /// Parse a list; `open` is its LPAREN under the cursor
    fn parse_list(&mut self, open: &'t Token) -> Node {
        self.advance();
        let start = start_position(open);
        let mut children = Vec::new();

        loop {
            let Some(token) = self.peek().filter(|token| !self.is_recovery_point(token)) else {
                self.errors.push(ParseError::UnclosedParen {
                    offset: open.offset,
                    position: start,
                });
                let (end_offset, end) = self.last_end;
                return Node::List(ListNode {
                    children,
                    range: Range::new(open.offset..end_offset, start, end),
                    closed: false,
                });
            };

            match leaf_term(token) {
                Some(term) => children.push(self.parse_term(token, term)),
                None if token.kind == TokenKind::LParen => children.push(self.parse_list(token)),
                None => {
                    self.advance();
                    let (end_offset, end) = self.last_end;
                    return Node::list(children, Range::new(open.offset..end_offset, start, end));
                }
            }
        }
    }

    fn is_recovery_point(&self, token: &Token) -> bool {
        self.recover
            && token.kind == TokenKind::LParen
            && token.column == 0
            && token.line > self.formula_line
    }

    /// Consume the leaf `token` under the cursor
    fn parse_term(&mut self, token: &'t Token, term: Term) -> Node {
        self.advance();
        let (end_offset, end) = self.last_end;
        Node::term(
            term,
            Range::new(token.offset..end_offset, start_position(token), end),
        )
    }
}

/// The term a leaf token denotes; `None` for parentheses
fn leaf_term(token: &Token) -> Option<Term> {
    let term = match token.kind {
        TokenKind::Atom => Term::Atom(token.text.clone()),
        TokenKind::Variable => Term::Variable(token.text.clone()),
        TokenKind::RowVariable => Term::RowVariable(token.text.clone()),
        TokenKind::Number => Term::Number(token.text.clone()),
        TokenKind::String => Term::String(unquote(&token.text)),
        TokenKind::LParen | TokenKind::RParen => return None,
    };
    Some(term)
}

fn start_position(token: &Token) -> Position {
    Position::new(token.line, token.column)
}

/// Strip the quotes of a string token and resolve backslash escapes
///
/// Works on unterminated strings too: the value simply runs to the end of the text.
fn unquote(text: &str) -> String {
    let mut value = String::with_capacity(text.len());
    let mut chars = text.chars();
    chars.next();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    value.push(escaped);
                }
            }
            '"' => break,
            _ => value.push(c),
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_text(text: &str) -> SourceOutput {
        parse_source(text, "test")
    }

    #[test]
    fn test_nested_lists() {
        let output = parse_text("(=> (instance ?X Dog) (instance ?X Animal))");
        assert!(!output.has_errors());
        assert_eq!(output.nodes.len(), 1);

        let list = output.nodes[0].as_list().unwrap();
        assert!(list.closed);
        assert_eq!(list.children.len(), 3);
        assert_eq!(list.children[0].as_atom(), Some("=>"));
        assert_eq!(list.children[1].as_list().unwrap().children.len(), 3);
        assert_eq!(list.range.span, 0..43);
    }

    #[test]
    fn test_top_level_siblings() {
        let output = parse_text("(p a)\n(q b)\nFoo");
        assert_eq!(output.nodes.len(), 3);
        assert_eq!(output.nodes[2].as_atom(), Some("Foo"));
        assert_eq!(output.nodes[1].range().start, Position::new(1, 0));
    }

    #[test]
    fn test_empty_list() {
        let output = parse_text("()");
        assert_eq!(output.nodes.len(), 1);
        assert!(output.nodes[0].as_list().unwrap().children.is_empty());
    }

    #[test]
    fn test_unclosed_paren_keeps_partial_list() {
        let output = parse_text("(instance Foo Bar");
        assert_eq!(output.nodes.len(), 1);
        assert_eq!(
            output.parse_errors,
            vec![ParseError::UnclosedParen {
                offset: 0,
                position: Position::new(0, 0),
            }]
        );
        let list = output.nodes[0].as_list().unwrap();
        assert!(!list.closed);
        assert_eq!(list.children.len(), 3);
        assert_eq!(list.range.span, 0..17);
    }

    #[test]
    fn test_unclosed_paren_does_not_swallow_next_formula() {
        let output = parse_text("(instance Foo Bar\n(subclass Dog Animal)");
        assert_eq!(output.nodes.len(), 2);
        assert_eq!(output.parse_errors.len(), 1);
        let second = output.nodes[1].as_list().unwrap();
        assert!(second.closed);
        assert_eq!(second.children[0].as_atom(), Some("subclass"));
    }

    #[test]
    fn test_indented_nested_list_is_not_a_recovery_point() {
        let output = parse_text("(and\n  (p a)\n  (q b))");
        assert!(!output.has_errors());
        assert_eq!(output.nodes.len(), 1);
    }

    #[test]
    fn test_column_zero_sublist_in_balanced_input() {
        let output = parse_text("(=>\n(instance ?X Dog)\n(instance ?X Animal))");
        assert!(!output.has_errors(), "{:?}", output.error_messages());
        assert_eq!(output.nodes.len(), 1);

        let list = output.nodes[0].as_list().unwrap();
        assert!(list.closed);
        assert_eq!(list.children.len(), 3);
        assert_eq!(list.children[1].range().start, Position::new(1, 0));
    }

    #[test]
    fn test_recovery_only_applies_to_the_unbalanced_formula() {
        let output = parse_text("(and\n(p a)\n(q b))\n(instance Foo Bar\n(subclass Dog Animal)");
        assert_eq!(
            output.parse_errors,
            vec![ParseError::UnclosedParen {
                offset: 18,
                position: Position::new(3, 0),
            }]
        );
        assert_eq!(output.nodes.len(), 3);
        assert_eq!(output.nodes[0].as_list().unwrap().children.len(), 3);
        assert!(output.nodes[2].as_list().unwrap().closed);
    }

    #[test]
    fn test_dangling_paren() {
        let output = parse_text("(p a))\n(q b)");
        assert_eq!(output.nodes.len(), 2);
        assert_eq!(
            output.parse_errors,
            vec![ParseError::DanglingParen {
                offset: 5,
                position: Position::new(0, 5),
            }]
        );
    }

    #[test]
    fn test_string_values_are_unquoted() {
        let output = parse_text(r#"(documentation Foo EnglishLanguage "A \"quoted\" word")"#);
        let list = output.nodes[0].as_list().unwrap();
        assert_eq!(
            list.children[3].as_term(),
            Some(&Term::String("A \"quoted\" word".to_string()))
        );
    }

    #[test]
    fn test_error_messages_are_ordered() {
        let output = parse_text(") (p ?1");
        let messages = output.error_messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("dangling"));
        assert!(messages[1].starts_with("unclosed"));
        assert!(messages[2].starts_with("illegal leading character"));
    }

    #[test]
    fn test_unquote_unterminated() {
        assert_eq!(unquote("\"abc"), "abc");
        assert_eq!(unquote("\"a\\\\b\""), "a\\b");
    }
}
