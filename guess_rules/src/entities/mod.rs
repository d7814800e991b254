//! Subject definitions and attribute key helpers.

mod subject;

pub use subject::*;

use std::collections::BTreeMap;

/// Attribute key -> boolean value.
///
/// Ordered so that a serialized profile always lists its keys the same way.
pub type AttributeMap = BTreeMap<String, bool>;

/// Strip the punctuation a player tends to type around a question.
///
/// `"¿Can dodge bullets?"` becomes `"Can dodge bullets"`.
pub fn strip_question_marks(text: &str) -> &str {
    text.trim()
        .trim_start_matches(|c: char| c == '¿' || c == '¡')
        .trim_end_matches(|c: char| c == '?' || c == '!')
        .trim()
}

/// Derive the canonical attribute key for a free-text question.
///
/// Lowercases, drops surrounding question punctuation and joins the words
/// with `_`. Returns `None` when nothing is left.
pub fn attribute_key_for_question(text: &str) -> Option<String> {
    let words: Vec<String> = strip_question_marks(text)
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join("_"))
    }
}
