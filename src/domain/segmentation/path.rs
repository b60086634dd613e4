//! Outcome paths.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::membership::Tier;

/// The segment a user lands in after the quiz.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Path {
    /// Default segment: just getting started.
    #[default]
    Starter,
    /// Building an audience through content or digital products.
    Creator,
    /// Selling services or freelance work.
    Freelancer,
    /// Already earning and ready to grow it.
    Scaler,
}

impl Path {
    pub fn all() -> &'static [Path] {
        &[Path::Starter, Path::Creator, Path::Freelancer, Path::Scaler]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Path::Starter => "STARTER",
            Path::Creator => "CREATOR",
            Path::Freelancer => "FREELANCER",
            Path::Scaler => "SCALER",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Path::Starter => "Starter",
            Path::Creator => "Creator",
            Path::Freelancer => "Freelancer",
            Path::Scaler => "Scaler",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Path::Starter => "Build the foundations and pick your first income stream.",
            Path::Creator => "Grow an audience with content and turn it into digital products.",
            Path::Freelancer => "Package your skills into services and land your first clients.",
            Path::Scaler => "Systematize what already works and scale it.",
        }
    }

    /// Tier stored next to the path when a plan is generated.
    pub fn recommended_tier(&self) -> Tier {
        match self {
            Path::Starter => Tier::Starter,
            Path::Creator | Path::Freelancer => Tier::Pro,
            Path::Scaler => Tier::Operator,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
