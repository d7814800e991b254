//! Schema Registry - the attribute keys known to the engine and their questions.

use guess_rules::Subject;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

use super::{LEGACY_QUESTIONS, SEED_QUESTIONS};

/// One attribute key and the question asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub key: String,
    pub question: String,
}

/// Result of registering a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new entry was appended.
    Added,
    /// The key was already registered; nothing changed.
    AlreadyKnown,
}

/// Ordered registry of attribute keys.
///
/// Each key has exactly one question and no two keys share a question, so the
/// question -> key mapping is lossless.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: Vec<RegistryEntry>,
    by_key: HashMap<String, usize>,
    by_question: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the union of every subject's keys.
    ///
    /// Keys are visited in sorted order, so the same collection always yields
    /// the same question list.
    pub fn from_subjects(subjects: &[Subject]) -> Self {
        let keys: BTreeSet<&str> = subjects
            .iter()
            .flat_map(|s| s.attributes.keys().map(String::as_str))
            .collect();

        let mut registry = Self::new();
        for key in keys {
            registry.register(key, phrase_for_key(key));
        }
        debug!(
            "Derived {} questions from {} subjects",
            registry.len(),
            subjects.len()
        );
        registry
    }

    /// Register a key with its question.
    ///
    /// A key that is already known keeps its existing question. A question
    /// already used by another key is suffixed with the raw key.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        question: impl Into<String>,
    ) -> RegisterOutcome {
        let key = key.into();
        if self.by_key.contains_key(&key) {
            return RegisterOutcome::AlreadyKnown;
        }

        let mut question = question.into();
        while let Some(&existing) = self.by_question.get(&question) {
            let disambiguated = format!("{} ({})", question, key);
            warn!(
                "Question '{}' for key '{}' collides with key '{}', using '{}'",
                question, key, self.entries[existing].key, disambiguated
            );
            question = disambiguated;
        }

        let index = self.entries.len();
        self.by_key.insert(key.clone(), index);
        self.by_question.insert(question.clone(), index);
        self.entries.push(RegistryEntry { key, question });
        RegisterOutcome::Added
    }

    /// All entries in asking order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// The question asked for a key.
    pub fn question_for(&self, key: &str) -> Option<&str> {
        self.by_key
            .get(key)
            .map(|&i| self.entries[i].question.as_str())
    }

    /// The key a question was derived from.
    pub fn key_for(&self, question: &str) -> Option<&str> {
        self.by_question
            .get(question)
            .map(|&i| self.entries[i].key.as_str())
    }

    /// The key whose question reads like `question`, ignoring case.
    pub fn find_question(&self, question: &str) -> Option<&str> {
        if let Some(key) = self.key_for(question) {
            return Some(key);
        }
        let wanted = question.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.question.to_lowercase() == wanted)
            .map(|e| e.key.as_str())
    }
}

/// Canned phrasing for a known key, if the translation table has one.
pub fn translation_for(key: &str) -> Option<&'static str> {
    SEED_QUESTIONS
        .iter()
        .chain(LEGACY_QUESTIONS)
        .find(|(k, _)| *k == key)
        .map(|(_, question)| *question)
}

/// Phrase a key mechanically: separators become spaces, the first letter is
/// capitalised and a question mark is appended.
///
/// `"can_dodge_bullets"` becomes `"Can dodge bullets?"`.
pub fn synthesize_question(key: &str) -> String {
    let spaced: String = key
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    let words = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut chars = words.chars();
    match chars.next() {
        Some(first) => format!("{}{}?", first.to_uppercase(), chars.as_str()),
        None => format!("{}?", key),
    }
}

/// The question for a key: canned translation first, mechanical phrasing otherwise.
pub fn phrase_for_key(key: &str) -> String {
    translation_for(key)
        .map(str::to_string)
        .unwrap_or_else(|| synthesize_question(key))
}
