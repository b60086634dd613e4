//! In-memory user context store.
//!
//! Stands in for the external user store in development and tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entitlement::UserContext;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::UserContextReader;

/// In-memory implementation of the UserContextReader port.
#[derive(Debug, Default)]
pub struct InMemoryUserContextStore {
    contexts: RwLock<HashMap<UserId, UserContext>>,
    fail_reads: bool,
}

impl InMemoryUserContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose reads always fail (for testing error flows).
    pub fn failing() -> Self {
        Self {
            contexts: RwLock::new(HashMap::new()),
            fail_reads: true,
        }
    }

    pub async fn put(&self, user_id: UserId, context: UserContext) {
        self.contexts.write().await.insert(user_id, context);
    }
}

#[async_trait]
impl UserContextReader for InMemoryUserContextStore {
    async fn get_context(&self, user_id: &UserId) -> Result<Option<UserContext>, DomainError> {
        if self.fail_reads {
            return Err(DomainError::storage("Simulated read failure")
                .with_detail("user_id", user_id.as_str()));
        }
        Ok(self.contexts.read().await.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::Tier;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn returns_stored_context() {
        let store = InMemoryUserContextStore::new();
        store.put(user(), UserContext::for_tier(Tier::Pro)).await;

        let ctx = store.get_context(&user()).await.unwrap();
        assert_eq!(ctx, Some(UserContext::for_tier(Tier::Pro)));
    }

    #[tokio::test]
    async fn unknown_user_is_none() {
        let store = InMemoryUserContextStore::new();
        assert!(store.get_context(&user()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failing_store_errors() {
        let store = InMemoryUserContextStore::failing();
        let err = store.get_context(&user()).await.unwrap_err();
        assert_eq!(err.details.get("user_id").map(String::as_str), Some("user-1"));
    }
}
