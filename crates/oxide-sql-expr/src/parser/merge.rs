//! List accumulation for keywords that may repeat.

/// Appends `parsed` to `existing`, keeping the order of both.
///
/// An absent list behaves like an empty one.
#[must_use]
pub fn merge<T>(existing: Option<Vec<T>>, parsed: Vec<T>) -> Vec<T> {
    match existing {
        Some(mut list) => {
            list.extend(parsed);
            list
        }
        None => parsed,
    }
}
