//! In-memory path assignment store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{PathAssignmentRecord, PathAssignmentRepository};

/// In-memory implementation of the PathAssignmentRepository port.
///
/// Keeps only the latest assignment per user.
#[derive(Debug, Default)]
pub struct InMemoryAssignmentStore {
    records: RwLock<HashMap<UserId, PathAssignmentRecord>>,
    fail_writes: bool,
}

impl InMemoryAssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail (for testing error flows).
    pub fn failing() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            fail_writes: true,
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl PathAssignmentRepository for InMemoryAssignmentStore {
    async fn save(&self, record: &PathAssignmentRecord) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::storage("Simulated write failure")
                .with_detail("user_id", record.user_id.as_str()));
        }
        self.records
            .write()
            .await
            .insert(record.user_id.clone(), record.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PathAssignmentRecord>, DomainError> {
        Ok(self.records.read().await.get(user_id).cloned())
    }
}
