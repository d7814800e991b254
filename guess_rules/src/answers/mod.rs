//! Per-session answers collected from the player.

use serde::{Deserialize, Serialize};

use crate::entities::AttributeMap;
use crate::mechanics::Response;

/// Attribute key -> answer, built by omission.
///
/// An "unknown" response leaves the key absent, so a missing key means
/// "not known" and is never confused with `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerMap {
    answers: AttributeMap,
}

impl AnswerMap {
    /// Create an empty answer map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a response for a key.
    ///
    /// Returns `true` if the response was stored, `false` for "unknown".
    pub fn record(&mut self, key: impl Into<String>, response: Response) -> bool {
        match response.as_bool() {
            Some(value) => {
                self.answers.insert(key.into(), value);
                true
            }
            None => false,
        }
    }

    /// Store a definite answer.
    pub fn insert(&mut self, key: impl Into<String>, value: bool) {
        self.answers.insert(key.into(), value);
    }

    /// Get the answer for a key, if one was given.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.answers.get(key).copied()
    }

    /// Check if the player answered this key.
    pub fn contains(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over answered keys in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Copy the answers into a fresh attribute map.
    pub fn to_attributes(&self) -> AttributeMap {
        self.answers.clone()
    }
}

impl FromIterator<(String, bool)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

impl From<AttributeMap> for AnswerMap {
    fn from(answers: AttributeMap) -> Self {
        Self { answers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_omitted() {
        let mut answers = AnswerMap::new();

        assert!(answers.record("hair_dark", Response::Yes));
        assert!(answers.record("wears_glasses", Response::No));
        assert!(!answers.record("is_villain", Response::Unknown));

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("hair_dark"), Some(true));
        assert_eq!(answers.get("wears_glasses"), Some(false));
        assert_eq!(answers.get("is_villain"), None);
        assert!(!answers.contains("is_villain"));
    }

    #[test]
    fn test_later_answer_overwrites() {
        let mut answers = AnswerMap::new();
        answers.insert("has_suit", true);
        answers.insert("has_suit", false);
        assert_eq!(answers.get("has_suit"), Some(false));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_to_attributes_is_a_copy() {
        let mut answers = AnswerMap::new();
        answers.insert("is_human", true);

        let mut attributes = answers.to_attributes();
        attributes.insert("can_fly".to_string(), true);

        assert_eq!(answers.len(), 1);
        assert_eq!(attributes.len(), 2);
    }
}
