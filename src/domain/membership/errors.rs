//! Plan registry consistency errors.

use thiserror::Error;

use super::{FeatureKey, Tier};

/// The plan table is inconsistent.
///
/// This is the only hard failure in the engine and is meant to surface at
/// startup or in tests, never on a request path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanRegistryError {
    #[error("No plan configured for tier {0}")]
    MissingPlan(Tier),

    #[error("Feature '{feature}' is unlocked at {lower} but locked at higher tier {higher}")]
    MonotonicityViolated {
        feature: FeatureKey,
        lower: Tier,
        higher: Tier,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonicity_message_names_feature_and_tiers() {
        let err = PlanRegistryError::MonotonicityViolated {
            feature: FeatureKey::Community,
            lower: Tier::Pro,
            higher: Tier::Operator,
        };
        assert_eq!(
            err.to_string(),
            "Feature 'community' is unlocked at Pro but locked at higher tier Operator"
        );
    }
}
