//! GeneratePlanHandler - Command handler for turning quiz answers into a plan.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::segmentation::{explain_assignment, QuizAnswers};
use crate::ports::{PathAssignmentRecord, PathAssignmentRepository};

/// Command to assign a path from a quiz submission.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub user_id: UserId,
    pub answers: QuizAnswers,
}

/// Handler for plan generation.
///
/// Resolves the path once, derives the recommended tier and persists both.
pub struct GeneratePlanHandler {
    repository: Arc<dyn PathAssignmentRepository>,
}

impl GeneratePlanHandler {
    pub fn new(repository: Arc<dyn PathAssignmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: GeneratePlanCommand,
    ) -> Result<PathAssignmentRecord, DomainError> {
        let assignment = explain_assignment(&cmd.answers);
        let record = PathAssignmentRecord::new(cmd.user_id, assignment, Timestamp::now());

        self.repository.save(&record).await?;

        tracing::info!(
            user_id = %record.user_id,
            path = %record.path,
            recommended_tier = %record.recommended_tier,
            "plan generated"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssignmentStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::membership::Tier;
    use crate::domain::segmentation::questions::*;
    use crate::domain::segmentation::Path;

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    #[tokio::test]
    async fn persists_assignment_with_recommended_tier() {
        let store = Arc::new(InMemoryAssignmentStore::new());
        let handler = GeneratePlanHandler::new(store.clone());

        let record = handler
            .handle(GeneratePlanCommand {
                user_id: test_user_id(),
                answers: QuizAnswers::new().with(INTEREST_CONTENT, VERY_INTERESTED),
            })
            .await
            .unwrap();

        assert_eq!(record.path, Path::Creator);
        assert_eq!(record.recommended_tier, Tier::Pro);

        let stored = store.find_by_user(&test_user_id()).await.unwrap();
        assert_eq!(stored, Some(record));
    }

    #[tokio::test]
    async fn empty_quiz_still_produces_starter_plan() {
        let store = Arc::new(InMemoryAssignmentStore::new());
        let handler = GeneratePlanHandler::new(store);

        let record = handler
            .handle(GeneratePlanCommand {
                user_id: test_user_id(),
                answers: QuizAnswers::new(),
            })
            .await
            .unwrap();

        assert_eq!(record.path, Path::Starter);
        assert_eq!(record.recommended_tier, Tier::Starter);
        assert!(record.matched_rule.is_none());
    }

    #[tokio::test]
    async fn fails_when_repository_fails() {
        let handler = GeneratePlanHandler::new(Arc::new(InMemoryAssignmentStore::failing()));

        let result = handler
            .handle(GeneratePlanCommand {
                user_id: test_user_id(),
                answers: QuizAnswers::new(),
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::StorageError);
    }
}
