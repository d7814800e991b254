//! # Guess Core
//!
//! The engine of the guessing game. It loads the knowledge store, derives the
//! question vocabulary from it, ranks subjects against a player's answers and
//! grows the knowledge base whenever a guess is wrong.
//!
//! ## Core Components
//!
//! - **knowledge_base**: the subject store, its seed and the schema registry
//! - **ranking**: score-then-popularity ordering of subjects
//! - **learning**: new subjects and questions after a rejected guess
//! - **session**: the prompting seam, question sessions and the game loop
//!
//! ## Design Philosophy
//!
//! - **Explicit ownership**: the store is loaded once and owned by the game; nothing is global
//! - **Full rewrites**: every mutation persists the whole collection
//! - **Schema by union**: the question list is whatever keys the subjects carry

pub mod config;
pub mod error;
pub mod knowledge_base;
pub mod learning;
pub mod ranking;
pub mod session;
pub mod testing;

pub use config::*;
pub use error::*;
pub use knowledge_base::*;
pub use learning::*;
pub use ranking::*;
pub use session::*;
