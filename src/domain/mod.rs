//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared identifiers and error types
//! - `membership` - Tiers, feature keys and the static plan registry
//! - `segmentation` - Quiz answers to outcome path
//! - `entitlement` - Feature access and upgrade suggestions
//! - `analytics` - Decision graph for the admin audit view

pub mod analytics;
pub mod entitlement;
pub mod foundation;
pub mod membership;
pub mod segmentation;
