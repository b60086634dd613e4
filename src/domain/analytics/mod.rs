//! Analytics module - decision graph for the admin audit view.
//!
//! Reuses the segmentation rule table; never part of a live request path.

mod builder;
mod graph;

pub use builder::DecisionGraphBuilder;
pub use graph::{DecisionGraph, EdgeKind, GraphEdge, GraphNode, NodeKind};
