//! UserContextReader port.
//!
//! Loads the tier and selection the entitlement resolver needs. The user
//! store is external; this port only reads from it.

use async_trait::async_trait;

use crate::domain::entitlement::UserContext;
use crate::domain::foundation::{DomainError, UserId};

/// Read access to per-user entitlement facts.
#[async_trait]
pub trait UserContextReader: Send + Sync {
    /// Current tier and selection for a user.
    ///
    /// Returns `None` if the store has no record for the user.
    async fn get_context(&self, user_id: &UserId) -> Result<Option<UserContext>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_context_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn UserContextReader) {}
    }
}
