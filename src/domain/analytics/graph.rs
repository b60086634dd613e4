//! Decision graph view model for the admin audit diagram.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::segmentation::{Path, RuleMatch};

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Start,
    /// Asked, but neither decisive nor adjusting.
    Question,
    DecisiveQuestion,
    AdjustingQuestion,
    Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    /// Set on outcome nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,
    /// Records that ended here. Outcome nodes only, and only with history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Question order in the quiz.
    Sequence,
    /// An accepted answer feeding a path rule.
    Answer,
    /// Nothing matched; default path.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleMatch>,
    /// Records attributed to this edge. Answer and fallback edges only, and
    /// only with history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// Nodes and edges derived from the rule table, optionally with counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    /// Number of historical records aggregated, if any were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_processed: Option<usize>,
}

impl DecisionGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Answer and fallback edges ending at `path`'s outcome node.
    pub fn edges_into(&self, path: Path) -> Vec<&GraphEdge> {
        let target = outcome_node_id(path);
        self.edges.iter().filter(|e| e.to == target).collect()
    }

    /// Records per outcome path. Empty when built without history.
    pub fn path_totals(&self) -> BTreeMap<Path, u64> {
        self.nodes
            .iter()
            .filter_map(|n| Some((n.path?, n.count?)))
            .collect()
    }
}

pub(crate) const START_NODE_ID: &str = "start";
pub(crate) const FALLBACK_EDGE_ID: &str = "fallback";

pub(crate) fn question_node_id(key: &str) -> String {
    format!("q:{}", key)
}

pub(crate) fn outcome_node_id(path: Path) -> String {
    format!("path:{}", path)
}

pub(crate) fn answer_edge_id(rule: RuleMatch, question: &str) -> String {
    format!("rule:{}:{}:{}", rule.rule, rule.clause, question)
}
