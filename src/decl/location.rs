//! Character offset to line/column conversion for reporting

use serde::Serialize;
use std::fmt;

/// A 1-based line and column; the column counts characters
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

/// Line index over one source string, in character units
pub struct SourceLocation {
    /// Character indices where each line starts
    line_starts: Vec<usize>,
    char_count: usize,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let mut char_count = 0;

        for (index, ch) in source.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(index + 1);
            }
            char_count = index + 1;
        }

        Self {
            line_starts,
            char_count,
        }
    }

    /// Convert a character offset to a position. Offsets past the end clamp to it.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.char_count);
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);

        Position::new(line + 1, offset - self.line_starts[line] + 1)
    }
}
