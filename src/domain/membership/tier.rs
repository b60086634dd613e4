//! Subscription tier definitions.
//!
//! A user's stored tier is a raw rank: 0 means "no plan", 1..=3 map to the
//! paid tiers below. Rank ordering is capability ordering.

use serde::{Deserialize, Serialize};

/// Rank stored for users without any plan.
pub const NO_PLAN_RANK: i32 = 0;

/// Paid subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Entry plan: one chosen path plus downloads.
    Starter,

    /// Every path, community, templates and scripts.
    Pro,

    /// Highest plan: everything in Pro plus SOPs.
    Operator,
}

impl Tier {
    /// All tiers in ascending rank order.
    pub fn all() -> &'static [Tier] {
        &[Tier::Starter, Tier::Pro, Tier::Operator]
    }

    /// Resolves a stored rank. Returns `None` for 0 and anything out of range.
    pub fn from_rank(rank: i32) -> Option<Tier> {
        match rank {
            1 => Some(Tier::Starter),
            2 => Some(Tier::Pro),
            3 => Some(Tier::Operator),
            _ => None,
        }
    }

    /// Parses the lowercase slug used in storage and CTA payloads.
    pub fn from_slug(slug: &str) -> Option<Tier> {
        Tier::all().iter().copied().find(|tier| tier.slug() == slug)
    }

    /// Numeric rank of this tier. Higher rank = more features.
    pub fn rank(&self) -> i32 {
        match self {
            Tier::Starter => 1,
            Tier::Pro => 2,
            Tier::Operator => 3,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Tier::Starter => "starter",
            Tier::Pro => "pro",
            Tier::Operator => "operator",
        }
    }

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Starter => "Starter",
            Tier::Pro => "Pro",
            Tier::Operator => "Operator",
        }
    }

    /// Pro and Operator see every path without a prior selection.
    pub fn has_full_catalog(&self) -> bool {
        *self >= Tier::Pro
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
