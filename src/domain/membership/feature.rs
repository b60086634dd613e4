//! Gated feature keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A capability that may be locked behind a tier.
///
/// The serialized form is the key content-serving code already uses
/// (`"paths:all"`, `"community"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatureKey {
    /// Every path in the catalog.
    #[serde(rename = "paths:all")]
    PathsAll,
    /// The one path a Starter user selected.
    #[serde(rename = "paths:single")]
    PathsSingle,
    #[serde(rename = "community")]
    Community,
    #[serde(rename = "templates")]
    Templates,
    #[serde(rename = "scripts")]
    Scripts,
    #[serde(rename = "downloads")]
    Downloads,
    /// Standard operating procedures.
    #[serde(rename = "sops")]
    Sops,
}

impl FeatureKey {
    pub fn all() -> &'static [FeatureKey] {
        &[
            FeatureKey::PathsAll,
            FeatureKey::PathsSingle,
            FeatureKey::Community,
            FeatureKey::Templates,
            FeatureKey::Scripts,
            FeatureKey::Downloads,
            FeatureKey::Sops,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKey::PathsAll => "paths:all",
            FeatureKey::PathsSingle => "paths:single",
            FeatureKey::Community => "community",
            FeatureKey::Templates => "templates",
            FeatureKey::Scripts => "scripts",
            FeatureKey::Downloads => "downloads",
            FeatureKey::Sops => "sops",
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("feature", format!("unknown key '{}'", s)))
    }
}
