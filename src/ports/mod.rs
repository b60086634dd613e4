//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the platform's data store. Adapters implement these ports.
//!
//! - `UserContextReader` - tier and selection per user
//! - `PathAssignmentRepository` - persisted plan-generation results
//! - `QuizHistoryReader` - historical submissions for analytics

mod path_assignment_repository;
mod quiz_history_reader;
mod user_context_reader;

pub use path_assignment_repository::{PathAssignmentRecord, PathAssignmentRepository};
pub use quiz_history_reader::QuizHistoryReader;
pub use user_context_reader::UserContextReader;
