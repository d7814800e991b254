//! Error types for the guessing engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the engine.
///
/// Malformed player input never shows up here; it is handled by re-prompting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The knowledge store exists but cannot be parsed.
    #[error("knowledge store {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no subject at position {0}")]
    UnknownSubject(usize),

    /// A taught question has no words left once punctuation is removed.
    #[error("question '{0}' has no words to derive an attribute key from")]
    EmptyQuestion(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The input stream ended while a prompt was waiting for an answer.
    #[error("input closed while waiting for an answer")]
    InputClosed,
}
