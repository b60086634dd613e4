//! Application handlers.
//!
//! Command and query handlers that load data through ports and call the
//! pure domain resolvers.

mod build_decision_graph;
mod check_feature_access;
mod generate_plan;

pub use build_decision_graph::{BuildDecisionGraphHandler, BuildDecisionGraphQuery};
pub use check_feature_access::{CheckFeatureAccessHandler, CheckFeatureAccessQuery};
pub use generate_plan::{GeneratePlanCommand, GeneratePlanHandler};
