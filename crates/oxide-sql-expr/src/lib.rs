//! # oxide-sql-expr
//!
//! Turns a SQL-like query string into a structured [`Expression`]: a map from
//! clause name to clause content, without building a full SQL syntax tree.
//!
//! The query is scanned once for clause keywords ("breakpoints" such as
//! `SELECT`, `FROM` or `LEFT JOIN`). The text between two breakpoints is
//! handed to a parser chosen by the first one:
//!
//! - `SELECT` and the joins become field lists, with `alias.field` detection
//! - `WHERE` is split into condition fragments on `AND` / `OR`
//! - everything else is stored verbatim
//!
//! ```rust
//! use oxide_sql_expr::{Field, parse};
//!
//! let expr = parse("SELECT u.id, name FROM users u WHERE age>18 AND active=1");
//!
//! assert_eq!(
//!     expr.select(),
//!     Some(&[Field::aliased("u", "id"), Field::name("name")][..])
//! );
//! assert_eq!(expr.from(), Some("users u"));
//! assert_eq!(
//!     expr.where_conditions(),
//!     Some(&["age>18".to_string(), "active=1".to_string()][..])
//! );
//! ```
//!
//! Keywords are matched case-sensitively and only in upper case. Parsing
//! never fails; see [`parse`] for how odd input degrades.

pub mod expression;
pub mod normalize;
pub mod parser;
pub mod scan;

pub use expression::{ClauseValue, Expression, Field};
pub use normalize::normalize;
pub use parser::parse;
pub use scan::{Breakpoint, Clause, Handler, Span, segment};
