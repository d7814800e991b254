//! Response tokens and their parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A player's answer to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Response {
    Yes,
    No,
    Unknown,
}

impl Response {
    /// The boolean value of a definite answer. `None` for "unknown".
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Response::Yes => Some(true),
            Response::No => Some(false),
            Response::Unknown => None,
        }
    }
}

/// Problems with a configured token vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("response token for '{0}' is empty")]
    EmptyToken(&'static str),

    #[error("response token '{0}' is used for more than one answer")]
    DuplicateToken(String),
}

/// The exact tokens accepted at prompts.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Nothing
/// outside these tokens is ever coerced into an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseVocabulary {
    pub yes: String,
    pub no: String,
    pub unknown: String,
}

impl Default for ResponseVocabulary {
    fn default() -> Self {
        Self::english()
    }
}

impl ResponseVocabulary {
    /// `yes` / `no` / `unknown`.
    pub fn english() -> Self {
        Self {
            yes: "yes".to_string(),
            no: "no".to_string(),
            unknown: "unknown".to_string(),
        }
    }

    /// `si` / `no` / `nose`.
    pub fn spanish() -> Self {
        Self {
            yes: "si".to_string(),
            no: "no".to_string(),
            unknown: "nose".to_string(),
        }
    }

    /// Check that every token is non-empty and distinct.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        let tokens = [
            ("yes", normalize(&self.yes)),
            ("no", normalize(&self.no)),
            ("unknown", normalize(&self.unknown)),
        ];

        for (label, token) in &tokens {
            if token.is_empty() {
                return Err(VocabularyError::EmptyToken(*label));
            }
        }
        for i in 0..tokens.len() {
            for j in (i + 1)..tokens.len() {
                if tokens[i].1 == tokens[j].1 {
                    return Err(VocabularyError::DuplicateToken(tokens[i].1.clone()));
                }
            }
        }
        Ok(())
    }

    /// Parse a question answer: yes, no or unknown.
    pub fn parse_response(&self, input: &str) -> Option<Response> {
        let input = normalize(input);
        if input == normalize(&self.yes) {
            Some(Response::Yes)
        } else if input == normalize(&self.no) {
            Some(Response::No)
        } else if input == normalize(&self.unknown) {
            Some(Response::Unknown)
        } else {
            None
        }
    }

    /// Parse a strict yes/no answer. The "unknown" token is rejected.
    pub fn parse_yes_no(&self, input: &str) -> Option<bool> {
        match self.parse_response(input)? {
            Response::Unknown => None,
            definite => definite.as_bool(),
        }
    }

    /// Hint shown next to a question, e.g. `yes/no/unknown`.
    pub fn response_hint(&self) -> String {
        format!("{}/{}/{}", self.yes, self.no, self.unknown)
    }

    /// Hint shown next to a yes/no prompt, e.g. `yes/no`.
    pub fn yes_no_hint(&self) -> String {
        format!("{}/{}", self.yes, self.no)
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}
