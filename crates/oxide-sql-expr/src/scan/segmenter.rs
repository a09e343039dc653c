//! Slicing a query into clauses.

use core::iter::FusedIterator;

use serde::Serialize;

use super::{Breakpoint, Scanner, Span};

/// A keyword together with the text it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Clause<'a> {
    /// The breakpoint that opened the clause.
    pub keyword: Breakpoint,
    /// Where the keyword itself sits in the input.
    #[serde(flatten)]
    pub span: Span,
    /// Trimmed text between this keyword and the next one (or the end).
    pub content: &'a str,
}

/// Iterator over the clauses of a query, in source order.
///
/// Text before the first breakpoint is dropped. The next breakpoint is found
/// once and carried forward as the start of the following clause, so the
/// input is scanned a single time.
#[derive(Debug, Clone)]
pub struct Clauses<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
    pending: Option<(Breakpoint, Span)>,
}

impl<'a> Clauses<'a> {
    /// Creates a clause iterator over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut scanner = Scanner::new(input);
        let pending = scanner.next_breakpoint();
        Self {
            input,
            scanner,
            pending,
        }
    }
}

impl<'a> Iterator for Clauses<'a> {
    type Item = Clause<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (keyword, span) = self.pending.take()?;
        self.pending = self.scanner.next_breakpoint();

        let end = self
            .pending
            .map_or(self.input.len(), |(_, next)| next.start);
        Some(Clause {
            keyword,
            span,
            content: self.input[span.end..end].trim(),
        })
    }
}

impl FusedIterator for Clauses<'_> {}

/// Splits `text` into clauses.
#[must_use]
pub fn segment(text: &str) -> Clauses<'_> {
    Clauses::new(text)
}
