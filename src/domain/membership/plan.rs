//! Plan registry: what each tier unlocks.
//!
//! The registry is built once per process and never mutated. Every tier's
//! feature map is total over [`FeatureKey`].

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{FeatureKey, PlanRegistryError, Tier};

/// Configuration for a single paid tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanConfig {
    pub tier: Tier,
    /// Stable slug, e.g. `"pro"`.
    pub name: &'static str,
    /// Label shown in pricing tables.
    pub label: &'static str,
    pub rank: i32,
    pub features: BTreeMap<FeatureKey, bool>,
}

impl PlanConfig {
    /// Get the plan shipped for a tier.
    ///
    /// # Plan Configuration
    ///
    /// | Feature | Starter | Pro | Operator |
    /// |---------|---------|-----|----------|
    /// | paths:single | Yes | Yes | Yes |
    /// | downloads | Yes | Yes | Yes |
    /// | paths:all | No | Yes | Yes |
    /// | community | No | Yes | Yes |
    /// | templates | No | Yes | Yes |
    /// | scripts | No | Yes | Yes |
    /// | sops | No | No | Yes |
    pub fn for_tier(tier: Tier) -> Self {
        let (label, enabled): (&'static str, &[FeatureKey]) = match tier {
            Tier::Starter => (
                "Starter",
                &[FeatureKey::PathsSingle, FeatureKey::Downloads],
            ),
            Tier::Pro => (
                "Pro",
                &[
                    FeatureKey::PathsAll,
                    FeatureKey::PathsSingle,
                    FeatureKey::Community,
                    FeatureKey::Templates,
                    FeatureKey::Scripts,
                    FeatureKey::Downloads,
                ],
            ),
            Tier::Operator => ("Operator", FeatureKey::all()),
        };
        Self::with_features(tier, label, enabled)
    }

    /// Builds a plan whose map is `true` exactly for `enabled`.
    pub fn with_features(tier: Tier, label: &'static str, enabled: &[FeatureKey]) -> Self {
        let features = FeatureKey::all()
            .iter()
            .map(|key| (*key, enabled.contains(key)))
            .collect();
        Self {
            tier,
            name: tier.slug(),
            label,
            rank: tier.rank(),
            features,
        }
    }

    /// Whether this plan unlocks `feature`. A missing entry counts as locked.
    pub fn includes(&self, feature: FeatureKey) -> bool {
        self.features.get(&feature).copied().unwrap_or(false)
    }
}

static GLOBAL: Lazy<PlanRegistry> = Lazy::new(PlanRegistry::shipped);

/// Ordered, immutable table of plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanRegistry {
    plans: Vec<PlanConfig>,
}

impl PlanRegistry {
    /// The process-wide registry.
    pub fn global() -> &'static PlanRegistry {
        &GLOBAL
    }

    /// The plans the platform sells.
    pub fn shipped() -> Self {
        Self::from_plans(Tier::all().iter().map(|t| PlanConfig::for_tier(*t)).collect())
    }

    /// Builds a registry from arbitrary plans, sorted by rank.
    ///
    /// No validation happens here; call [`PlanRegistry::verify`].
    pub fn from_plans(mut plans: Vec<PlanConfig>) -> Self {
        plans.sort_by_key(|plan| plan.rank);
        Self { plans }
    }

    /// Plans in ascending rank order.
    pub fn plans(&self) -> &[PlanConfig] {
        &self.plans
    }

    /// Looks a plan up by stored rank. `None` for rank 0 and unknown ranks.
    pub fn plan_for(&self, rank: i32) -> Option<&PlanConfig> {
        let tier = Tier::from_rank(rank)?;
        self.plans.iter().find(|plan| plan.tier == tier)
    }

    /// Checks that every tier has a plan and that features only accumulate
    /// as rank increases.
    pub fn verify(&self) -> Result<(), PlanRegistryError> {
        for tier in Tier::all() {
            if !self.plans.iter().any(|plan| plan.tier == *tier) {
                tracing::error!(tier = %tier, "plan registry has no entry for tier");
                return Err(PlanRegistryError::MissingPlan(*tier));
            }
        }

        for feature in FeatureKey::all() {
            for (i, lower) in self.plans.iter().enumerate() {
                if !lower.includes(*feature) {
                    continue;
                }
                for higher in &self.plans[i + 1..] {
                    if higher.rank > lower.rank && !higher.includes(*feature) {
                        tracing::error!(
                            feature = %feature,
                            lower = %lower.tier,
                            higher = %higher.tier,
                            "plan registry is not monotonic"
                        );
                        return Err(PlanRegistryError::MonotonicityViolated {
                            feature: *feature,
                            lower: lower.tier,
                            higher: higher.tier,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Looks up the shipped plan for a stored tier rank.
pub fn plan_for(tier: i32) -> Option<&'static PlanConfig> {
    PlanRegistry::global().plan_for(tier)
}
