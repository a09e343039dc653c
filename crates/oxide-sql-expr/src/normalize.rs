//! Input cleanup applied before scanning.

use std::borrow::Cow;

/// Collapses every run of whitespace into one space and trims both ends.
///
/// Compound keywords such as `ORDER BY` only match with a single space
/// between their words, so this runs before scanning. Already-normalized
/// input is returned borrowed.
#[must_use]
pub fn normalize(text: &str) -> Cow<'_, str> {
    if is_normalized(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

fn is_normalized(text: &str) -> bool {
    let mut previous_space = true;
    for c in text.chars() {
        if c.is_whitespace() {
            if previous_space || c != ' ' {
                return false;
            }
            previous_space = true;
        } else {
            previous_space = false;
        }
    }
    !previous_space || text.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs() {
        assert_eq!(normalize("SELECT  a,\n\tb   FROM t"), "SELECT a, b FROM t");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  SELECT a "), "SELECT a");
        assert_eq!(normalize(" \n "), "");
    }

    #[test]
    fn test_borrows_clean_input() {
        assert!(matches!(normalize("SELECT a FROM t"), Cow::Borrowed(_)));
        assert!(matches!(normalize(""), Cow::Borrowed(_)));
        assert!(matches!(normalize("a\tb"), Cow::Owned(_)));
    }
}
