//! CheckFeatureAccessHandler - Query handler for gated content checks.

use std::sync::Arc;

use crate::domain::entitlement::{AccessDecision, EntitlementResolver, UserContext};
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::membership::FeatureKey;
use crate::ports::UserContextReader;

/// Query to check one feature for one user.
#[derive(Debug, Clone)]
pub struct CheckFeatureAccessQuery {
    pub user_id: UserId,
    pub feature: FeatureKey,
}

/// Handler for feature access checks.
///
/// This is called on every gated page render. A user missing from the store
/// is treated as having no plan; a store failure is returned so the caller
/// can deny.
pub struct CheckFeatureAccessHandler {
    reader: Arc<dyn UserContextReader>,
    resolver: EntitlementResolver<'static>,
}

impl CheckFeatureAccessHandler {
    pub fn new(reader: Arc<dyn UserContextReader>) -> Self {
        Self {
            reader,
            resolver: EntitlementResolver::global(),
        }
    }

    pub async fn handle(
        &self,
        query: CheckFeatureAccessQuery,
    ) -> Result<AccessDecision, DomainError> {
        let context = match self.reader.get_context(&query.user_id).await? {
            Some(context) => context,
            None => {
                tracing::debug!(user_id = %query.user_id, "no stored context, treating as no plan");
                UserContext::anonymous()
            }
        };

        let decision = self.resolver.evaluate(query.feature, &context);
        tracing::debug!(
            user_id = %query.user_id,
            feature = %query.feature,
            allowed = decision.allowed,
            "feature access checked"
        );
        Ok(decision)
    }
}
