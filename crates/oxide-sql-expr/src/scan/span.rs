//! Byte ranges into the query text.

use serde::Serialize;

/// A half-open byte range `[start, end)` in the (normalized) query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers.
    ///
    /// Spans produced by the scanner always sit on ASCII keyword edges, so
    /// they are valid char boundaries of the text they were taken from.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(7, 16);
        assert_eq!(span.len(), 9);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_span_slice() {
        let text = "SELECT a LEFT JOIN b";
        assert_eq!(Span::new(9, 18).slice(text), "LEFT JOIN");
        assert_eq!(Span::new(0, 0).slice(text), "");
    }
}
