//! Folding clauses into an expression.

use tracing::trace;

use super::{parse_conditions, parse_fields, parse_join};
use crate::expression::Expression;
use crate::scan::{Clause, Handler};

/// Parses one clause's content and folds it into `expression`.
///
/// List handlers append to what earlier clauses of the same keyword left
/// behind; scalar handlers replace it.
#[must_use]
pub fn apply(expression: Expression, clause: &Clause<'_>) -> Expression {
    let Clause {
        keyword, content, ..
    } = *clause;
    let handler = keyword.handler();
    trace!(
        keyword = keyword.as_str(),
        handler = handler.as_str(),
        start = clause.span.start,
        end = clause.span.end,
        "dispatching clause"
    );

    match handler {
        Handler::Fields => expression.with_fields(keyword, parse_fields(content)),
        Handler::Conditions => expression.with_conditions(keyword, parse_conditions(content)),
        Handler::Join => expression.with_fields(keyword, parse_join(content)),
        Handler::Scalar => expression.with_scalar(keyword, content),
    }
}
