//! Breakpoint scanning and clause segmentation.
//!
//! This module finds the clause keywords in a query and slices the text
//! between them.

mod breakpoint;
mod scanner;
mod segmenter;
mod span;

pub use breakpoint::{Breakpoint, Handler};
pub use scanner::{Scanner, next_breakpoint};
pub use segmenter::{Clause, Clauses, segment};
pub use span::Span;

pub(crate) use scanner::word_at;
