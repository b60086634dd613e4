//! PathAssignmentRepository port.
//!
//! Stores the outcome of plan generation: the assigned path and the tier
//! recommended alongside it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::membership::Tier;
use crate::domain::segmentation::{Path, PathAssignment, RuleMatch};

/// A persisted path assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAssignmentRecord {
    pub user_id: UserId,
    pub path: Path,
    pub recommended_tier: Tier,
    /// Rule that decided the path; `None` for the default.
    pub matched_rule: Option<RuleMatch>,
    pub assigned_at: Timestamp,
}

impl PathAssignmentRecord {
    pub fn new(user_id: UserId, assignment: PathAssignment, assigned_at: Timestamp) -> Self {
        Self {
            user_id,
            path: assignment.path,
            recommended_tier: assignment.path.recommended_tier(),
            matched_rule: assignment.matched,
            assigned_at,
        }
    }
}

/// Write/read access to stored assignments.
#[async_trait]
pub trait PathAssignmentRepository: Send + Sync {
    /// Saves the latest assignment for a user, replacing any previous one.
    async fn save(&self, record: &PathAssignmentRecord) -> Result<(), DomainError>;

    /// Latest assignment for a user, if any.
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PathAssignmentRecord>, DomainError>;
}
