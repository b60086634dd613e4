//! User-facing copy shown when a feature is locked.

use serde::Serialize;

use super::{FeatureKey, Tier};

/// Static copy row for a locked feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCopy {
    pub title: &'static str,
    pub body: &'static str,
    /// Tier suggested when no better upgrade target can be computed.
    pub upgrade_to: Tier,
    pub cta_label: &'static str,
}

/// Copy for a locked feature.
///
/// Exhaustive over [`FeatureKey`]; adding a key without copy fails to compile.
pub fn copy_for(feature: FeatureKey) -> FeatureCopy {
    match feature {
        FeatureKey::PathsAll => FeatureCopy {
            title: "Unlock every path",
            body: "Your plan covers the path you chose. Upgrade to follow every path in the catalog.",
            upgrade_to: Tier::Pro,
            cta_label: "Upgrade to Pro",
        },
        FeatureKey::PathsSingle => FeatureCopy {
            title: "Choose your path",
            body: "Your Starter plan includes one path. Pick the one you want to start with to unlock its lessons.",
            upgrade_to: Tier::Starter,
            cta_label: "Choose a path",
        },
        FeatureKey::Community => FeatureCopy {
            title: "Join the community",
            body: "Ask questions, share progress and get feedback from other students and mentors.",
            upgrade_to: Tier::Pro,
            cta_label: "Upgrade to Pro",
        },
        FeatureKey::Templates => FeatureCopy {
            title: "Ready-made templates",
            body: "Skip the blank page with the templates we use to launch offers and content.",
            upgrade_to: Tier::Pro,
            cta_label: "Upgrade to Pro",
        },
        FeatureKey::Scripts => FeatureCopy {
            title: "Sales and content scripts",
            body: "Word-for-word scripts for calls, videos and outreach.",
            upgrade_to: Tier::Pro,
            cta_label: "Upgrade to Pro",
        },
        FeatureKey::Downloads => FeatureCopy {
            title: "Downloadable resources",
            body: "Download worksheets and lesson resources to keep offline.",
            upgrade_to: Tier::Starter,
            cta_label: "Get Starter",
        },
        FeatureKey::Sops => FeatureCopy {
            title: "Operating procedures",
            body: "The step-by-step SOPs we use to run and scale the business behind the courses.",
            upgrade_to: Tier::Operator,
            cta_label: "Upgrade to Operator",
        },
    }
}
