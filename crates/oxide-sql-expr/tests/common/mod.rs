#![allow(dead_code)]

use oxide_sql_expr::{Breakpoint, ClauseValue, Expression, Field, parse};

pub fn fields(expr: &Expression, keyword: Breakpoint) -> Vec<Field> {
    match expr.get(keyword) {
        Some(ClauseValue::Fields(fields)) => fields.clone(),
        other => panic!("Expected field list under {keyword}, got {other:?}"),
    }
}

pub fn conditions(expr: &Expression) -> Vec<String> {
    match expr.get(Breakpoint::Where) {
        Some(ClauseValue::Conditions(c)) => c.clone(),
        other => panic!("Expected conditions under WHERE, got {other:?}"),
    }
}

pub fn scalar(expr: &Expression, keyword: Breakpoint) -> String {
    match expr.get(keyword) {
        Some(ClauseValue::Scalar(s)) => s.clone(),
        other => panic!("Expected scalar under {keyword}, got {other:?}"),
    }
}

pub fn names(list: &[&str]) -> Vec<Field> {
    list.iter().copied().map(Field::name).collect()
}

/// Parses `sql` and returns its JSON form.
pub fn to_json(sql: &str) -> serde_json::Value {
    serde_json::to_value(parse(sql))
        .unwrap_or_else(|e| panic!("Failed to serialize: {sql}\nError: {e:?}"))
}
