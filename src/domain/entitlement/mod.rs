//! Entitlement module - who may use which gated feature.
//!
//! Depends only on the plan registry in `membership`. All functions are
//! pure and fail closed.

mod decision;
mod resolver;
mod user_context;

pub use decision::{AccessDecision, LockedReason};
pub use resolver::{
    can_access, can_access_course, can_access_path, locked_reason, next_tier_for,
    EntitlementResolver,
};
pub use user_context::UserContext;
