//! Subject profiles - the entities the engine tries to guess.

use serde::{Deserialize, Serialize};

use super::AttributeMap;
use crate::answers::AnswerMap;

/// A guessable character described by boolean attributes.
///
/// The set of attribute keys differs from subject to subject; a key the
/// subject does not carry simply never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Display name. Not required to be unique.
    #[serde(alias = "nombre")]
    pub name: String,

    /// Originating series or universe.
    #[serde(alias = "serie")]
    pub category: String,

    /// Coarse classification label.
    #[serde(alias = "genero")]
    pub group: String,

    #[serde(default, alias = "atributos")]
    pub attributes: AttributeMap,

    /// Times this subject was confirmed as the right guess. Tie-break only.
    #[serde(default, alias = "veces_elegido")]
    pub popularity: u32,
}

impl Subject {
    /// Create a subject with no attributes and zero popularity.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            group: group.into(),
            attributes: AttributeMap::new(),
            popularity: 0,
        }
    }

    /// Set an attribute value.
    pub fn with_attribute(mut self, key: impl Into<String>, value: bool) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Set several attribute values at once.
    pub fn with_attributes<K: Into<String>>(
        mut self,
        attributes: impl IntoIterator<Item = (K, bool)>,
    ) -> Self {
        self.attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Set the popularity counter.
    pub fn with_popularity(mut self, popularity: u32) -> Self {
        self.popularity = popularity;
        self
    }

    /// Look up an attribute. `None` means the subject does not carry the key.
    pub fn attribute(&self, key: &str) -> Option<bool> {
        self.attributes.get(key).copied()
    }

    /// Count the answers this subject agrees with.
    ///
    /// Answers for keys the subject lacks earn nothing and cost nothing.
    pub fn score(&self, answers: &AnswerMap) -> usize {
        answers
            .iter()
            .filter(|(key, value)| self.attribute(key) == Some(*value))
            .count()
    }

    /// Record that this subject was confirmed as the correct guess.
    pub fn record_confirmation(&mut self) {
        self.popularity = self.popularity.saturating_add(1);
    }
}
