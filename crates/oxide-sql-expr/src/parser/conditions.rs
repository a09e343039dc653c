//! Condition splitting for `WHERE` content.

use crate::scan::word_at;

/// Words that separate condition fragments.
const CONNECTIVES: [&str; 2] = ["AND", "OR"];

/// Splits predicate text on whole-word `AND` / `OR`.
///
/// Fragments are trimmed and kept in source order, empty ones included.
/// Operators and operands inside a fragment are not looked at.
#[must_use]
pub fn parse_conditions(content: &str) -> Vec<String> {
    let bytes = content.as_bytes();
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match CONNECTIVES
            .into_iter()
            .find(|word| word_at(bytes, pos, word))
        {
            Some(word) => {
                push_fragment(&mut fragments, &content[start..pos]);
                pos += word.len();
                start = pos;
            }
            None => pos += 1,
        }
    }
    push_fragment(&mut fragments, &content[start..]);

    fragments
}

fn push_fragment(fragments: &mut Vec<String>, text: &str) {
    fragments.push(text.trim().to_string());
}
