//! Forward breakpoint scanner.
//!
//! The scanner walks the input once, left to right. At each position that
//! can open a token it tries the breakpoint table longest keyword first, so
//! the first hit is both the earliest and, at that position, the longest
//! match. Cost is linear in the input times the size of the table.

use super::{Breakpoint, Span};

/// A cursor that yields breakpoints in source order.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The text being scanned.
    input: &'a str,
    /// Byte position of the next candidate.
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Creates a scanner positioned at byte offset `pos`.
    #[must_use]
    pub const fn at(input: &'a str, pos: usize) -> Self {
        Self { input, pos }
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once the whole input has been consumed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Finds the next breakpoint at or after the current position and moves
    /// past it. Returns `None` (and exhausts the scanner) when none remain.
    pub fn next_breakpoint(&mut self) -> Option<(Breakpoint, Span)> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let start = self.pos;
            self.pos += 1;
            if let Some(breakpoint) = match_at(bytes, start) {
                let span = Span::new(start, start + breakpoint.as_str().len());
                self.pos = span.end;
                return Some((breakpoint, span));
            }
        }
        None
    }
}

impl Iterator for Scanner<'_> {
    type Item = (Breakpoint, Span);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_breakpoint()
    }
}

/// Returns the nearest breakpoint starting at or after byte offset `from`.
///
/// Ties at one position go to the longest keyword; otherwise the earliest
/// position wins.
#[must_use]
pub fn next_breakpoint(text: &str, from: usize) -> Option<(Breakpoint, Span)> {
    Scanner::at(text, from).next_breakpoint()
}

/// Returns true for bytes that separate tokens.
pub(crate) const fn is_boundary(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'(' || b == b')'
}

/// Returns true if a token may start at `pos`.
pub(crate) fn opens_token(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || is_boundary(bytes[pos - 1])
}

/// Returns true if a token may end at `end`.
pub(crate) fn closes_token(bytes: &[u8], end: usize) -> bool {
    end >= bytes.len() || is_boundary(bytes[end])
}

/// Returns true if `word` occurs at `pos` as a whole token.
pub(crate) fn word_at(bytes: &[u8], pos: usize, word: &str) -> bool {
    bytes[pos..].starts_with(word.as_bytes())
        && opens_token(bytes, pos)
        && closes_token(bytes, pos + word.len())
}

fn match_at(bytes: &[u8], pos: usize) -> Option<Breakpoint> {
    let opens = opens_token(bytes, pos);
    if !opens && bytes[pos] != b'(' && bytes[pos] != b')' {
        return None;
    }

    Breakpoint::BY_LENGTH.into_iter().find(|bp| {
        let keyword = bp.as_str();
        if !bp.is_word() {
            return bytes[pos..].starts_with(keyword.as_bytes());
        }
        opens && word_at(bytes, pos, keyword)
    })
}
