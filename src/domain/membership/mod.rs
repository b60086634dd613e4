//! Membership domain module.
//!
//! The tier/plan registry: which tier unlocks which feature, and what to
//! tell a user when a feature is locked.
//!
//! # Module Structure
//!
//! - `tier` - Tier subscription levels and rank lookups
//! - `feature` - Closed set of gated feature keys
//! - `plan` - Static plan table and its monotonicity check
//! - `copy` - Locked-feature copy

mod copy;
mod errors;
mod feature;
mod plan;
mod tier;

pub use copy::{copy_for, FeatureCopy};
pub use errors::PlanRegistryError;
pub use feature::FeatureKey;
pub use plan::{plan_for, PlanConfig, PlanRegistry};
pub use tier::{Tier, NO_PLAN_RANK};
