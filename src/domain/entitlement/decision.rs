//! Results returned to content-serving code.

use serde::{Deserialize, Serialize};

use crate::domain::membership::{FeatureCopy, FeatureKey, Tier};

/// Why a feature is locked and what to offer instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedReason {
    pub feature: FeatureKey,
    pub title: String,
    pub body: String,
    pub cta_label: String,
    /// Tier the call to action points at, serialized as its slug.
    pub cta_plan: Tier,
}

impl LockedReason {
    /// The feature's static copy, unchanged.
    pub fn from_copy(feature: FeatureKey, copy: FeatureCopy) -> Self {
        Self {
            feature,
            title: copy.title.to_string(),
            body: copy.body.to_string(),
            cta_label: copy.cta_label.to_string(),
            cta_plan: copy.upgrade_to,
        }
    }

    /// The feature's copy pointing at a computed upgrade target.
    pub fn upgrade(feature: FeatureKey, copy: FeatureCopy, target: Tier) -> Self {
        Self {
            feature,
            title: copy.title.to_string(),
            body: copy.body.to_string(),
            cta_label: format!("Upgrade to {}", target.display_name()),
            cta_plan: target,
        }
    }
}

/// Access answer plus the upsell to show when denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    pub feature: FeatureKey,
    pub allowed: bool,
    pub locked_reason: Option<LockedReason>,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_denied(&self) -> bool {
        !self.allowed
    }
}
