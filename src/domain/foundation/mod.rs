//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps and error types used across the engine's ports and handlers.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SelectionId, UserId};
pub use timestamp::Timestamp;
