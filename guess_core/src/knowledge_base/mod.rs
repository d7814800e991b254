//! Knowledge Base module - the durable memory of the engine.
//!
//! - **Store**: the subject collection and its JSON file
//! - **Registry**: the attribute vocabulary and the question asked for each key
//! - **Seed**: the starter collection written on first run

mod registry;
mod seed;
mod store;

pub use registry::*;
pub use seed::*;
pub use store::*;
