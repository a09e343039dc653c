//! Field list parsing (`SELECT` lists and join targets).

use crate::expression::Field;

/// Parses one comma-free token into a field.
///
/// `u.id` becomes an aliased field, `id` a bare one. A token with more than
/// one dot is kept as [`Field::Malformed`] instead of failing the parse.
#[must_use]
pub fn parse_field(token: &str) -> Field {
    let token = token.trim();
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(alias), Some(field), None) => Field::aliased(alias.trim(), field.trim()),
        (_, _, Some(_)) => Field::malformed(token),
        _ => Field::name(token),
    }
}

/// Splits clause content on commas and parses each trimmed token.
///
/// Empty tokens are kept as empty names, so empty content gives one entry.
#[must_use]
pub fn parse_fields(content: &str) -> Vec<Field> {
    content.split(',').map(parse_field).collect()
}
