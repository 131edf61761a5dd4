use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in the source text.
///
/// Lines are 1-based, columns are 0-based and reset at every newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first character of any input.
    pub fn start() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Source location span.
///
/// `start` is the first character of the lexeme, `end` is the position of
/// the first character after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Create a new span.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start.line, self.start.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let p = Position::start();
        assert_eq!(p.line, 1);
        assert_eq!(p.column, 0);
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(3, 1) < Position::new(3, 2));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(4, 2)), "line 4, column 2");
    }

    #[test]
    fn test_span_display() {
        let s = Span::new(Position::new(3, 7), Position::new(3, 15));
        assert_eq!(format!("{s}"), "3:7");
    }
}
