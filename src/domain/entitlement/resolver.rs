//! Entitlement resolution.
//!
//! Fail-closed: an unknown tier, a missing plan or a missing feature entry
//! all mean "no access". Nothing here returns an error or panics.

use crate::domain::membership::{copy_for, FeatureKey, PlanRegistry, Tier, NO_PLAN_RANK};

use super::{AccessDecision, LockedReason, UserContext};

/// Answers access questions against a plan registry.
#[derive(Debug, Clone, Copy)]
pub struct EntitlementResolver<'a> {
    registry: &'a PlanRegistry,
}

impl EntitlementResolver<'static> {
    /// Resolver over the process-wide registry.
    pub fn global() -> Self {
        Self::new(PlanRegistry::global())
    }
}

impl<'a> EntitlementResolver<'a> {
    pub fn new(registry: &'a PlanRegistry) -> Self {
        Self { registry }
    }

    /// Whether `user` may use `feature`.
    pub fn can_access(&self, feature: FeatureKey, user: &UserContext) -> bool {
        let Some(plan) = self.registry.plan_for(user.tier) else {
            if user.tier != NO_PLAN_RANK {
                tracing::warn!(tier = user.tier, feature = %feature, "unrecognized tier, denying access");
            }
            return false;
        };

        if !plan.includes(feature) {
            return false;
        }

        match feature {
            // Starter's single path only opens once one has been chosen.
            FeatureKey::PathsSingle => plan.tier != Tier::Starter || user.has_selection(),
            FeatureKey::PathsAll => plan.tier.has_full_catalog(),
            _ => true,
        }
    }

    /// Cheapest tier ranked strictly above `current_rank` that includes `feature`.
    pub fn next_tier_for(&self, feature: FeatureKey, current_rank: i32) -> Option<Tier> {
        self.registry
            .plans()
            .iter()
            .filter(|plan| plan.rank > current_rank && plan.includes(feature))
            .min_by_key(|plan| plan.rank)
            .map(|plan| plan.tier)
    }

    /// Locked-feature copy, or `None` when the user already has access.
    pub fn locked_reason(&self, feature: FeatureKey, user: &UserContext) -> Option<LockedReason> {
        if self.can_access(feature, user) {
            return None;
        }

        let copy = copy_for(feature);

        // A Starter user who has not chosen yet needs to choose, not upgrade.
        if feature == FeatureKey::PathsSingle
            && user.resolved_tier() == Some(Tier::Starter)
            && !user.has_selection()
        {
            return Some(LockedReason::from_copy(feature, copy));
        }

        match self.next_tier_for(feature, user.tier) {
            Some(target) => Some(LockedReason::upgrade(feature, copy, target)),
            None => {
                tracing::warn!(
                    tier = user.tier,
                    feature = %feature,
                    "no higher tier unlocks feature, using default copy"
                );
                Some(LockedReason::from_copy(feature, copy))
            }
        }
    }

    /// Access answer and upsell in one call.
    pub fn evaluate(&self, feature: FeatureKey, user: &UserContext) -> AccessDecision {
        let locked_reason = self.locked_reason(feature, user);
        AccessDecision {
            feature,
            allowed: locked_reason.is_none(),
            locked_reason,
        }
    }
}

/// See [`EntitlementResolver::can_access`].
pub fn can_access(feature: FeatureKey, user: &UserContext) -> bool {
    EntitlementResolver::global().can_access(feature, user)
}

/// See [`EntitlementResolver::locked_reason`].
pub fn locked_reason(feature: FeatureKey, user: &UserContext) -> Option<LockedReason> {
    EntitlementResolver::global().locked_reason(feature, user)
}

/// See [`EntitlementResolver::next_tier_for`].
pub fn next_tier_for(feature: FeatureKey, current_rank: i32) -> Option<Tier> {
    EntitlementResolver::global().next_tier_for(feature, current_rank)
}

/// Whether `user` may open the course `course_id`.
pub fn can_access_course(course_id: &str, user: &UserContext) -> bool {
    can_open_catalog_item(course_id, user)
}

/// Whether `user` may open the path `path_id`.
pub fn can_access_path(path_id: &str, user: &UserContext) -> bool {
    can_open_catalog_item(path_id, user)
}

fn can_open_catalog_item(id: &str, user: &UserContext) -> bool {
    match user.resolved_tier() {
        Some(tier) if tier.has_full_catalog() => true,
        Some(Tier::Starter) => user
            .selected_path_id
            .as_ref()
            .map(|selection| selection.matches(id))
            .unwrap_or(false),
        _ => false,
    }
}
