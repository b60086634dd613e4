//! QuizHistoryReader port.
//!
//! Batch read of historical quiz submissions for the decision graph.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::segmentation::QuizAnswers;

#[async_trait]
pub trait QuizHistoryReader: Send + Sync {
    /// Most recent submissions, newest first, at most `limit` of them.
    async fn list_answers(&self, limit: usize) -> Result<Vec<QuizAnswers>, DomainError>;
}
