//! Source location tracking

use serde::Serialize;
use std::fmt;

/// Where a diagnostic points: a byte offset into the source, or past its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    /// Zero-based byte offset
    Offset(usize),
    /// End of input
    Eof,
}

impl Location {
    /// Byte offset, if this location is inside the source
    #[inline]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Location::Offset(offset) => Some(*offset),
            Location::Eof => None,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Location::Eof)
    }
}

impl fmt::Display for Location {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Location::Offset(offset) => write!(f, "position {}", offset),
            Location::Eof => write!(f, "<EOF>"),
        }
    }
}

/// Source position (line, column, and byte offset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, counted in characters)
    pub column: usize,
    /// Byte offset from start of source
    pub offset: usize,
}

impl Position {
    /// Create a new position with offset
    #[inline]
    pub fn with_offset(
        line: usize,
        column: usize,
        offset: usize,
    ) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source text with a line table for diagnostics
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Display name (`<expr>` for command-line input)
    pub name: String,
    /// Source content
    pub content: String,
    /// Byte offset of the first character of every line
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );

        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Resolve a location; `Eof` resolves to the position just past the last byte
    pub fn position(
        &self,
        location: Location,
    ) -> Position {
        let offset = location
            .offset()
            .unwrap_or(self.content.len())
            .min(self.content.len());
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self
            .content
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);
        Position::with_offset(line, column + 1, offset)
    }

    /// Text of a 1-indexed line without its terminator
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.content.len());
        self.content
            .get(start..end)
            .map(|text| text.trim_end_matches('\r'))
    }

    /// Number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

impl fmt::Display for SourceFile {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests;
