//! # Guess Rules
//!
//! The data side of the guessing game: subject profiles, attribute maps,
//! per-session answers and the response vocabulary. This crate performs no I/O
//! and knows nothing about storage or prompting.

pub mod answers;
pub mod entities;
pub mod mechanics;

pub use answers::*;
pub use entities::*;
pub use mechanics::*;
