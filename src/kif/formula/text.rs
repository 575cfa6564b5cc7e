//! Queries over raw formula text
//!
//! These run without a full parse and are used to cheaply pre-filter knowledge base entries.
//! They share the lexer's notion of whitespace and `;` comments.

/// Check if the text, ignoring leading whitespace and comments, opens a list
pub fn is_list_text(text: &str) -> bool {
    skip_trivia(text).starts_with('(')
}

/// First symbol after the first `(`, if the text is a list with a word head
///
/// `(instance Foo Bar)` gives `instance`; `( ; note\n subclass A B)` gives `subclass`;
/// `((f a) b)`, `()` and bare atoms give `None`.
pub fn head_symbol(text: &str) -> Option<&str> {
    let rest = skip_trivia(text).strip_prefix('(')?;
    let rest = skip_trivia(rest);
    let end = rest
        .find(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '"' | ';'))
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

fn skip_trivia(mut text: &str) -> &str {
    loop {
        text = text.trim_start();
        match text.strip_prefix(';') {
            Some(comment) => {
                text = match comment.find('\n') {
                    Some(newline) => &comment[newline + 1..],
                    None => "",
                };
            }
            None => return text,
        }
    }
}
