//! Segmentation module - quiz answers to outcome path.
//!
//! # Components
//!
//! - `QuizAnswers` - free-form answers keyed by question
//! - `questions` - the quiz catalog and decisive/adjusting membership lists
//! - `rules` - the ordered predicate table (first match wins)
//! - `assign_path` / `explain_assignment` - the resolver
//!
//! Everything here is pure: no I/O, no shared state.

mod answers;
mod path;
pub mod questions;
mod resolver;
mod rules;

pub use answers::{Answer, QuizAnswers};
pub use path::Path;
pub use questions::{QuestionMeta, QuestionRole, QUESTIONS};
pub use resolver::{assign_path, explain_assignment, PathAssignment, RuleMatch};
pub use rules::{Clause, Condition, PathRule, DEFAULT_PATH, PATH_RULES};
