//! Clause content parsers and the query entry point.

mod conditions;
pub mod dispatch;
mod fields;
mod join;
pub(crate) mod merge;

pub use conditions::parse_conditions;
pub use fields::{parse_field, parse_fields};
pub use join::parse_join;
pub use merge::merge;

use tracing::debug;

use crate::expression::Expression;
use crate::normalize::normalize;
use crate::scan::segment;

/// Parses a query into an [`Expression`].
///
/// Never fails: text before the first keyword is ignored, input without any
/// keyword yields an empty expression, and malformed fields are recorded
/// inline as [`Field::Malformed`](crate::Field::Malformed).
#[must_use]
pub fn parse(sql: &str) -> Expression {
    debug!(sql, "parsing query");
    let text = normalize(sql);
    let expression = segment(&text).fold(Expression::new(), |expression, clause| {
        dispatch::apply(expression, &clause)
    });
    debug!(clauses = expression.len(), "parsed query");
    expression
}
