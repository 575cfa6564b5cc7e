//! Source positions
//!
//! Every node and token knows where it came from: a byte span into the source text plus
//! 0-based line:column positions, with columns counted in bytes. Nodes built without source
//! text (test factories) carry the default 0:0..0:0 range.
//!
//! [`SourceLocation`] maps byte offsets to positions for the lexer.

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// Represents a position in source code (line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Represents a location in source code (start and end positions)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Byte offset of the first byte
    pub fn start_offset(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last byte
    pub fn end_offset(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(
            ByteRange { start: 0, end: 0 },
            Position::default(),
            Position::default(),
        )
    }
}

/// Line-start table for one source text
pub struct SourceLocation {
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();
        Self { line_starts }
    }

    /// Position of `offset`; an offset past the end lands on the last line
    pub fn byte_to_position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        Position::new(line, offset - self.line_starts[line])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_comparison() {
        let pos1 = Position::new(1, 5);
        let pos2 = Position::new(1, 5);
        let pos3 = Position::new(2, 3);

        assert_eq!(pos1, pos2);
        assert_ne!(pos1, pos3);
        assert!(pos1 < pos3);
    }

    #[test]
    fn test_range_display() {
        let location = Range::new(0..0, Position::new(1, 0), Position::new(2, 5));
        assert_eq!(format!("{}", location), "1:0..2:5");
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("(p a)\n(q b)\n(r)");

        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(5), Position::new(0, 5));
        assert_eq!(loc.byte_to_position(6), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(9), Position::new(1, 3));
        assert_eq!(loc.byte_to_position(12), Position::new(2, 0));
    }

    #[test]
    fn test_byte_to_position_past_end() {
        let loc = SourceLocation::new("(p a)\n");
        assert_eq!(loc.byte_to_position(6), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(8), Position::new(1, 2));
    }
}
