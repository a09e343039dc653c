//! The breakpoint table: every keyword that opens a clause.

use serde::{Serialize, Serializer};

/// A recognized clause keyword.
///
/// The set is closed. Adding a variant forces a decision in
/// [`Breakpoint::handler`], [`Breakpoint::key`] and [`Breakpoint::as_str`],
/// since all three match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Select,
    From,
    Where,

    // Data manipulation
    Update,
    Insert,
    To,
    Values,

    // Joins
    LeftJoin,
    RightJoin,
    InnerJoin,
    Join,

    // Trailing clauses
    GroupBy,
    OrderBy,
    Limit,

    Describe,

    // Grouping
    OpenParen,
    CloseParen,
}

/// How the content of a clause is parsed and folded into the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Comma-separated field list, appended.
    Fields,
    /// `AND`/`OR` separated condition fragments, appended.
    Conditions,
    /// Join target, appended to the join list of its kind.
    Join,
    /// Verbatim text, replacing any earlier value.
    Scalar,
}

impl Handler {
    /// Returns true if repeated clauses extend the existing list instead of
    /// replacing it.
    #[must_use]
    pub const fn accumulates(self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// Returns the handler name as shown by the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fields => "fields",
            Self::Conditions => "conditions",
            Self::Join => "join",
            Self::Scalar => "scalar",
        }
    }
}

impl Breakpoint {
    /// All breakpoints in declaration order.
    pub const ALL: [Self; 17] = [
        Self::Select,
        Self::From,
        Self::Where,
        Self::Update,
        Self::Insert,
        Self::To,
        Self::Values,
        Self::LeftJoin,
        Self::RightJoin,
        Self::InnerJoin,
        Self::Join,
        Self::GroupBy,
        Self::OrderBy,
        Self::Limit,
        Self::Describe,
        Self::OpenParen,
        Self::CloseParen,
    ];

    /// All breakpoints ordered longest keyword first.
    ///
    /// The scanner tries them in this order at every candidate position, so
    /// the first hit is the longest match there (`LEFT JOIN` before `JOIN`).
    /// Keywords of equal length never match at the same position.
    pub const BY_LENGTH: [Self; 17] = [
        Self::RightJoin,
        Self::InnerJoin,
        Self::LeftJoin,
        Self::GroupBy,
        Self::OrderBy,
        Self::Describe,
        Self::Select,
        Self::Update,
        Self::Insert,
        Self::Values,
        Self::Where,
        Self::Limit,
        Self::From,
        Self::Join,
        Self::To,
        Self::OpenParen,
        Self::CloseParen,
    ];

    /// Looks up a breakpoint by its exact keyword text.
    ///
    /// Matching is case-sensitive: `select` is not a breakpoint.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.as_str() == s)
    }

    /// Returns the keyword as it appears in a query.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Update => "UPDATE",
            Self::Insert => "INSERT",
            Self::To => "TO",
            Self::Values => "VALUES",
            Self::LeftJoin => "LEFT JOIN",
            Self::RightJoin => "RIGHT JOIN",
            Self::InnerJoin => "INNER JOIN",
            Self::Join => "JOIN",
            Self::GroupBy => "GROUP BY",
            Self::OrderBy => "ORDER BY",
            Self::Limit => "LIMIT",
            Self::Describe => "DESCRIBE",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
        }
    }

    /// Returns the key this clause is stored under in an expression.
    ///
    /// Word keywords are camelCased; parentheses keep their literal text.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::From => "from",
            Self::Where => "where",
            Self::Update => "update",
            Self::Insert => "insert",
            Self::To => "to",
            Self::Values => "values",
            Self::LeftJoin => "leftJoin",
            Self::RightJoin => "rightJoin",
            Self::InnerJoin => "innerJoin",
            Self::Join => "join",
            Self::GroupBy => "groupBy",
            Self::OrderBy => "orderBy",
            Self::Limit => "limit",
            Self::Describe => "describe",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
        }
    }

    /// Looks up a breakpoint by its expression key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.key() == key)
    }

    /// Returns how this clause's content is parsed and merged.
    #[must_use]
    pub const fn handler(self) -> Handler {
        match self {
            Self::Select => Handler::Fields,
            Self::Where => Handler::Conditions,
            Self::LeftJoin | Self::RightJoin | Self::InnerJoin | Self::Join => Handler::Join,
            Self::From
            | Self::Update
            | Self::Insert
            | Self::To
            | Self::Values
            | Self::GroupBy
            | Self::OrderBy
            | Self::Limit
            | Self::Describe
            | Self::OpenParen
            | Self::CloseParen => Handler::Scalar,
        }
    }

    /// Returns true for alphabetic keywords, which only match on token
    /// boundaries. Parentheses delimit themselves and match anywhere.
    #[must_use]
    pub const fn is_word(self) -> bool {
        !matches!(self, Self::OpenParen | Self::CloseParen)
    }

    /// Returns true if this is one of the join keywords.
    #[must_use]
    pub const fn is_join(self) -> bool {
        matches!(self.handler(), Handler::Join)
    }
}

impl core::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Breakpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_length_is_longest_first() {
        let lengths: Vec<usize> = Breakpoint::BY_LENGTH
            .iter()
            .map(|bp| bp.as_str().len())
            .collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_by_length_covers_table() {
        let mut by_length = Breakpoint::BY_LENGTH.to_vec();
        let mut all = Breakpoint::ALL.to_vec();
        by_length.sort();
        all.sort();
        assert_eq!(by_length, all);
    }

    #[test]
    fn test_from_keyword_is_case_sensitive() {
        assert_eq!(Breakpoint::from_keyword("SELECT"), Some(Breakpoint::Select));
        assert_eq!(
            Breakpoint::from_keyword("LEFT JOIN"),
            Some(Breakpoint::LeftJoin)
        );
        assert_eq!(Breakpoint::from_keyword("select"), None);
        assert_eq!(Breakpoint::from_keyword("HAVING"), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(Breakpoint::OrderBy.key(), "orderBy");
        assert_eq!(Breakpoint::InnerJoin.key(), "innerJoin");
        assert_eq!(Breakpoint::OpenParen.key(), "(");
        assert_eq!(Breakpoint::from_key("groupBy"), Some(Breakpoint::GroupBy));
        assert_eq!(Breakpoint::from_key("GROUP BY"), None);
    }

    #[test]
    fn test_handlers() {
        assert_eq!(Breakpoint::Select.handler(), Handler::Fields);
        assert_eq!(Breakpoint::Where.handler(), Handler::Conditions);
        assert_eq!(Breakpoint::Join.handler(), Handler::Join);
        assert_eq!(Breakpoint::From.handler(), Handler::Scalar);
        assert_eq!(Breakpoint::CloseParen.handler(), Handler::Scalar);
        assert!(Handler::Join.accumulates());
        assert!(!Handler::Scalar.accumulates());
    }

    #[test]
    fn test_is_word() {
        assert!(Breakpoint::GroupBy.is_word());
        assert!(!Breakpoint::OpenParen.is_word());
        assert!(Breakpoint::RightJoin.is_join());
        assert!(!Breakpoint::From.is_join());
    }
}
