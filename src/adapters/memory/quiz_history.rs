//! In-memory quiz history.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::segmentation::QuizAnswers;
use crate::ports::QuizHistoryReader;

/// In-memory implementation of the QuizHistoryReader port.
///
/// Submissions are appended in arrival order and listed newest first.
#[derive(Debug, Default)]
pub struct InMemoryQuizHistory {
    submissions: RwLock<Vec<QuizAnswers>>,
}

impl InMemoryQuizHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submissions(submissions: Vec<QuizAnswers>) -> Self {
        Self {
            submissions: RwLock::new(submissions),
        }
    }

    pub async fn record(&self, answers: QuizAnswers) {
        self.submissions.write().await.push(answers);
    }
}

#[async_trait]
impl QuizHistoryReader for InMemoryQuizHistory {
    async fn list_answers(&self, limit: usize) -> Result<Vec<QuizAnswers>, DomainError> {
        let submissions = self.submissions.read().await;
        Ok(submissions.iter().rev().take(limit).cloned().collect())
    }
}
