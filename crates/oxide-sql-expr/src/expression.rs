//! The structured expression produced by [`parse`](crate::parse).
//!
//! An [`Expression`] maps clause keys to their parsed content. It serializes
//! to the JSON shape consumed by expression-to-SQL generators:
//!
//! ```text
//! {
//!   "select":   [ "id", { "alias": "u", "field": "name" } ],
//!   "from":     "users u",
//!   "where":    [ "id=1", "active=1" ],
//!   "orderBy":  "id",
//!   "leftJoin": [ "orders" ],
//!   "limit":    "10"
//! }
//! ```

use core::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::parser::merge::merge;
use crate::scan::Breakpoint;

/// A column reference from a field list or join target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A bare name such as `id` or `*`.
    Name(String),
    /// A qualified name such as `u.id`.
    Aliased {
        /// The qualifier before the dot.
        alias: String,
        /// The name after the dot.
        field: String,
    },
    /// A token with more than one dot. Kept in place so parsing continues.
    Malformed {
        /// The offending token.
        token: String,
    },
}

impl Field {
    /// Creates a bare field.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a qualified field.
    #[must_use]
    pub fn aliased(alias: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Aliased {
            alias: alias.into(),
            field: field.into(),
        }
    }

    /// Creates a malformed field entry.
    #[must_use]
    pub fn malformed(token: impl Into<String>) -> Self {
        Self::Malformed {
            token: token.into(),
        }
    }

    /// Returns true if this entry is a diagnostic rather than a field.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns the diagnostic message for a malformed entry.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Malformed { token } => Some(format!(
                "invalid value ({token}): a field may carry only one alias, e.g. `table`.`field`"
            )),
            Self::Name(_) | Self::Aliased { .. } => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Aliased { alias, field } => write!(f, "{alias}.{field}"),
            Self::Malformed { token } => f.write_str(token),
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Name(name) => serializer.serialize_str(name),
            Self::Aliased { alias, field } => {
                let mut s = serializer.serialize_struct("Field", 2)?;
                s.serialize_field("alias", alias)?;
                s.serialize_field("field", field)?;
                s.end()
            }
            Self::Malformed { .. } => {
                serializer.serialize_str(&self.diagnostic().unwrap_or_default())
            }
        }
    }
}

/// The content stored under one clause key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClauseValue {
    /// Verbatim clause text.
    Scalar(String),
    /// Field list (`SELECT`, joins).
    Fields(Vec<Field>),
    /// Condition fragments (`WHERE`).
    Conditions(Vec<String>),
}

impl ClauseValue {
    /// Returns the text of a scalar value.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the entries of a field list.
    #[must_use]
    pub fn as_fields(&self) -> Option<&[Field]> {
        match self {
            Self::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the fragments of a condition list.
    #[must_use]
    pub fn as_conditions(&self) -> Option<&[String]> {
        match self {
            Self::Conditions(conditions) => Some(conditions),
            _ => None,
        }
    }
}

/// A parsed query: clause keys mapped to clause content.
///
/// Keys keep the order in which they were first seen. Equality compares
/// that order too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    entries: Vec<(Breakpoint, ClauseValue)>,
}

impl Expression {
    /// Creates an empty expression.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns true if no clause was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of clause keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value stored for a breakpoint.
    #[must_use]
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&ClauseValue> {
        self.entries
            .iter()
            .find(|(bp, _)| *bp == breakpoint)
            .map(|(_, value)| value)
    }

    /// Returns the value stored under an expression key such as `orderBy`.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&ClauseValue> {
        Breakpoint::from_key(key).and_then(|bp| self.get(bp))
    }

    /// Returns true if a value is stored for the breakpoint.
    #[must_use]
    pub fn contains(&self, breakpoint: Breakpoint) -> bool {
        self.get(breakpoint).is_some()
    }

    /// Iterates over the entries in first-seen order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(bp, _)| bp.key())
    }

    /// The `select` field list.
    #[must_use]
    pub fn select(&self) -> Option<&[Field]> {
        self.get(Breakpoint::Select).and_then(ClauseValue::as_fields)
    }

    /// The `from` text.
    #[must_use]
    pub fn from(&self) -> Option<&str> {
        self.scalar(Breakpoint::From)
    }

    /// The `where` condition fragments.
    #[must_use]
    pub fn where_conditions(&self) -> Option<&[String]> {
        self.get(Breakpoint::Where)
            .and_then(ClauseValue::as_conditions)
    }

    /// The `orderBy` text.
    #[must_use]
    pub fn order_by(&self) -> Option<&str> {
        self.scalar(Breakpoint::OrderBy)
    }

    /// The join targets recorded under one join keyword.
    #[must_use]
    pub fn joins(&self, kind: Breakpoint) -> Option<&[Field]> {
        if !kind.is_join() {
            return None;
        }
        self.get(kind).and_then(ClauseValue::as_fields)
    }

    /// The verbatim text recorded for a scalar clause.
    #[must_use]
    pub fn scalar(&self, breakpoint: Breakpoint) -> Option<&str> {
        self.get(breakpoint).and_then(ClauseValue::as_scalar)
    }

    /// Stores a scalar, replacing any earlier value for the breakpoint.
    #[must_use]
    pub fn with_scalar(mut self, breakpoint: Breakpoint, text: impl Into<String>) -> Self {
        self.insert(breakpoint, ClauseValue::Scalar(text.into()));
        self
    }

    /// Appends fields to the list stored for the breakpoint.
    #[must_use]
    pub fn with_fields(mut self, breakpoint: Breakpoint, fields: Vec<Field>) -> Self {
        match self.slot(breakpoint) {
            Some(ClauseValue::Fields(existing)) => {
                *existing = merge(Some(core::mem::take(existing)), fields);
            }
            _ => self.insert(breakpoint, ClauseValue::Fields(merge(None, fields))),
        }
        self
    }

    /// Appends condition fragments to the list stored for the breakpoint.
    #[must_use]
    pub fn with_conditions(mut self, breakpoint: Breakpoint, conditions: Vec<String>) -> Self {
        match self.slot(breakpoint) {
            Some(ClauseValue::Conditions(existing)) => {
                *existing = merge(Some(core::mem::take(existing)), conditions);
            }
            _ => self.insert(
                breakpoint,
                ClauseValue::Conditions(merge(None, conditions)),
            ),
        }
        self
    }

    fn slot(&mut self, breakpoint: Breakpoint) -> Option<&mut ClauseValue> {
        self.entries
            .iter_mut()
            .find(|(bp, _)| *bp == breakpoint)
            .map(|(_, value)| value)
    }

    fn insert(&mut self, breakpoint: Breakpoint, value: ClauseValue) {
        match self.slot(breakpoint) {
            Some(existing) => *existing = value,
            None => self.entries.push((breakpoint, value)),
        }
    }
}

/// Iterator over the entries of an [`Expression`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, (Breakpoint, ClauseValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Breakpoint, &'a ClauseValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(bp, value)| (*bp, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Expression {
    type Item = (Breakpoint, &'a ClauseValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (bp, value) in &self.entries {
            map.serialize_entry(bp.key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_expression() {
        let expr = Expression::new();
        assert!(expr.is_empty());
        assert_eq!(expr.len(), 0);
        assert_eq!(expr.select(), None);
        assert_eq!(expr.from(), None);
    }

    #[test]
    fn test_scalar_replaces() {
        let expr = Expression::new()
            .with_scalar(Breakpoint::From, "a")
            .with_scalar(Breakpoint::Limit, "5")
            .with_scalar(Breakpoint::From, "b");
        assert_eq!(expr.from(), Some("b"));
        assert_eq!(expr.keys().collect::<Vec<_>>(), vec!["from", "limit"]);
    }

    #[test]
    fn test_fields_accumulate() {
        let expr = Expression::new()
            .with_fields(Breakpoint::LeftJoin, vec![Field::name("b")])
            .with_fields(Breakpoint::LeftJoin, vec![Field::name("c")]);
        assert_eq!(
            expr.joins(Breakpoint::LeftJoin),
            Some(&[Field::name("b"), Field::name("c")][..])
        );
        assert_eq!(expr.joins(Breakpoint::From), None);
    }

    #[test]
    fn test_conditions_accumulate() {
        let expr = Expression::new()
            .with_conditions(Breakpoint::Where, vec!["a=1".to_string()])
            .with_conditions(Breakpoint::Where, vec!["b=2".to_string()]);
        assert_eq!(
            expr.where_conditions(),
            Some(&["a=1".to_string(), "b=2".to_string()][..])
        );
    }

    #[test]
    fn test_get_key() {
        let expr = Expression::new().with_scalar(Breakpoint::OrderBy, "id desc");
        assert_eq!(
            expr.get_key("orderBy"),
            Some(&ClauseValue::Scalar("id desc".to_string()))
        );
        assert_eq!(expr.get_key("ORDER BY"), None);
        assert!(expr.contains(Breakpoint::OrderBy));
    }

    #[test]
    fn test_iter_in_first_seen_order() {
        let expr = Expression::new()
            .with_scalar(Breakpoint::Limit, "1")
            .with_fields(Breakpoint::Select, vec![Field::name("a")]);
        let keys: Vec<Breakpoint> = (&expr).into_iter().map(|(bp, _)| bp).collect();
        assert_eq!(keys, vec![Breakpoint::Limit, Breakpoint::Select]);
        assert_eq!(expr.iter().len(), 2);
    }

    #[test]
    fn test_field_diagnostic() {
        let field = Field::malformed("a.b.c");
        assert!(field.is_malformed());
        let message = field.diagnostic().unwrap();
        assert!(message.contains("a.b.c"));
        assert_eq!(Field::name("a").diagnostic(), None);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::name("id").to_string(), "id");
        assert_eq!(Field::aliased("u", "id").to_string(), "u.id");
    }
}
