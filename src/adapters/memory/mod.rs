//! In-memory adapters for development and tests.
//!
//! Production wires these ports to the platform's data store instead.

mod assignment_store;
mod quiz_history;
mod user_context_store;

pub use assignment_store::InMemoryAssignmentStore;
pub use quiz_history::InMemoryQuizHistory;
pub use user_context_store::InMemoryUserContextStore;
