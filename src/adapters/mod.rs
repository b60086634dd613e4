//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory stores for development and tests

pub mod memory;

pub use memory::{InMemoryAssignmentStore, InMemoryQuizHistory, InMemoryUserContextStore};
