//! Pathwise - quiz segmentation and subscription entitlements.
//!
//! Turns onboarding quiz answers into one of four learning paths and decides
//! which gated features a subscription tier unlocks, with the upgrade to
//! suggest when one is locked.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
pub mod telemetry;
