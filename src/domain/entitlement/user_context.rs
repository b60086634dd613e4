//! Per-user facts the entitlement resolver needs.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::SelectionId;
use crate::domain::membership::{Tier, NO_PLAN_RANK};

/// The user's stored tier rank and, for Starter users, the one path or
/// course they picked.
///
/// `tier` is kept raw so that garbage from storage reaches the resolver and
/// is denied there instead of failing deserialization upstream. A stored
/// empty selection loads as no selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    pub tier: i32,
    #[serde(default, deserialize_with = "empty_selection_as_none")]
    pub selected_path_id: Option<SelectionId>,
}

fn empty_selection_as_none<'de, D>(deserializer: D) -> Result<Option<SelectionId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|id| SelectionId::new(id).ok()))
}

impl UserContext {
    pub fn new(tier: i32) -> Self {
        Self {
            tier,
            selected_path_id: None,
        }
    }

    /// A user without any plan.
    pub fn anonymous() -> Self {
        Self::new(NO_PLAN_RANK)
    }

    pub fn for_tier(tier: Tier) -> Self {
        Self::new(tier.rank())
    }

    pub fn with_selection(mut self, selection: SelectionId) -> Self {
        self.selected_path_id = Some(selection);
        self
    }

    /// The recognized tier, if any.
    pub fn resolved_tier(&self) -> Option<Tier> {
        Tier::from_rank(self.tier)
    }

    pub fn has_selection(&self) -> bool {
        self.selected_path_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_tier() {
        assert_eq!(UserContext::anonymous().resolved_tier(), None);
    }

    #[test]
    fn selection_is_optional_in_json() {
        let ctx: UserContext = serde_json::from_str(r#"{"tier":1}"#).unwrap();
        assert_eq!(ctx.resolved_tier(), Some(Tier::Starter));
        assert!(!ctx.has_selection());
    }

    #[test]
    fn out_of_range_tier_still_deserializes() {
        let ctx: UserContext =
            serde_json::from_str(r#"{"tier":9,"selected_path_id":"course-1"}"#).unwrap();
        assert_eq!(ctx.tier, 9);
        assert_eq!(ctx.resolved_tier(), None);
        assert!(ctx.has_selection());
    }

    #[test]
    fn empty_stored_selection_loads_as_none() {
        let ctx: UserContext =
            serde_json::from_str(r#"{"tier":1,"selected_path_id":""}"#).unwrap();
        assert!(!ctx.has_selection());
    }

    #[test]
    fn null_selection_loads_as_none() {
        let ctx: UserContext =
            serde_json::from_str(r#"{"tier":1,"selected_path_id":null}"#).unwrap();
        assert!(!ctx.has_selection());
    }
}
