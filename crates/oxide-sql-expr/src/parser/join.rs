//! Join target parsing.

use super::fields::parse_fields;
use crate::expression::Field;

/// Parses the content of a join clause.
///
/// The target goes through the field list rules, so `orders o` stays a bare
/// name and `s.orders` becomes an aliased one. Any `ON` predicate is left in
/// the text and takes part in the dot split: one dot in the whole clause
/// gives an aliased pair cut at that dot, two or more give a malformed entry.
#[must_use]
pub fn parse_join(content: &str) -> Vec<Field> {
    parse_fields(content)
}
