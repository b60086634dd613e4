//! Builds the decision graph from the path rule table.
//!
//! The graph is re-derived on every call. Question roles come from the static
//! decisive/adjusting lists, never from the rules themselves.

use std::collections::HashMap;

use crate::domain::segmentation::{
    explain_assignment, Path, QuestionMeta, QuestionRole, QuizAnswers, RuleMatch, DEFAULT_PATH,
    PATH_RULES, QUESTIONS,
};

use super::graph::{
    answer_edge_id, outcome_node_id, question_node_id, DecisionGraph, EdgeKind, GraphEdge,
    GraphNode, NodeKind, FALLBACK_EDGE_ID, START_NODE_ID,
};

/// Derives a [`DecisionGraph`] from question metadata and [`PATH_RULES`].
#[derive(Debug, Clone, Copy)]
pub struct DecisionGraphBuilder<'a> {
    questions: &'a [QuestionMeta],
}

impl Default for DecisionGraphBuilder<'static> {
    fn default() -> Self {
        Self::new(QUESTIONS)
    }
}

impl<'a> DecisionGraphBuilder<'a> {
    pub fn new(questions: &'a [QuestionMeta]) -> Self {
        Self { questions }
    }

    /// Builds the graph; with `history`, answer and fallback edges carry how
    /// many records each one decided.
    pub fn build(&self, history: Option<&[QuizAnswers]>) -> DecisionGraph {
        let mut nodes = vec![GraphNode {
            id: START_NODE_ID.to_string(),
            kind: NodeKind::Start,
            label: "Quiz start".to_string(),
            path: None,
            count: None,
        }];
        let mut edges = Vec::new();

        let mut previous = START_NODE_ID.to_string();
        for (i, question) in self.questions.iter().enumerate() {
            let id = question_node_id(question.key);
            nodes.push(question_node(question.key, question.prompt));
            edges.push(GraphEdge {
                id: format!("seq:{}", i),
                from: previous,
                to: id.clone(),
                kind: EdgeKind::Sequence,
                label: String::new(),
                rule: None,
                count: None,
            });
            previous = id;
        }

        for path in Path::all() {
            nodes.push(GraphNode {
                id: outcome_node_id(*path),
                kind: NodeKind::Outcome,
                label: path.title().to_string(),
                path: Some(*path),
                count: None,
            });
        }

        for (rule_index, rule) in PATH_RULES.iter().enumerate() {
            for (clause_index, clause) in rule.clauses.iter().enumerate() {
                let matched = RuleMatch {
                    rule: rule_index,
                    clause: clause_index,
                };
                for condition in clause.conditions {
                    let from = question_node_id(condition.question);
                    if !nodes.iter().any(|n| n.id == from) {
                        nodes.push(question_node(condition.question, condition.question));
                    }
                    edges.push(GraphEdge {
                        id: answer_edge_id(matched, condition.question),
                        from,
                        to: outcome_node_id(rule.path),
                        kind: EdgeKind::Answer,
                        label: condition.accepts.join(" | "),
                        rule: Some(matched),
                        count: None,
                    });
                }
            }
        }

        edges.push(GraphEdge {
            id: FALLBACK_EDGE_ID.to_string(),
            from: previous,
            to: outcome_node_id(DEFAULT_PATH),
            kind: EdgeKind::Fallback,
            label: "no rule matched".to_string(),
            rule: None,
            count: None,
        });

        let mut graph = DecisionGraph {
            nodes,
            edges,
            records_processed: None,
        };

        if let Some(records) = history {
            annotate(&mut graph, records);
        }

        tracing::info!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            records = graph.records_processed.unwrap_or(0),
            "built decision graph"
        );
        graph
    }
}

fn question_node(key: &str, label: &str) -> GraphNode {
    let kind = match QuestionRole::of(key) {
        QuestionRole::Decisive => NodeKind::DecisiveQuestion,
        QuestionRole::Adjusting => NodeKind::AdjustingQuestion,
        QuestionRole::Informational => NodeKind::Question,
    };
    GraphNode {
        id: question_node_id(key),
        kind,
        label: label.to_string(),
        path: None,
        count: None,
    }
}

/// Attributes every record to the edges of the clause that decided it.
fn annotate(graph: &mut DecisionGraph, records: &[QuizAnswers]) {
    let mut edge_counts: HashMap<String, u64> = HashMap::new();
    let mut path_counts: HashMap<Path, u64> = HashMap::new();

    for answers in records {
        let assignment = explain_assignment(answers);
        *path_counts.entry(assignment.path).or_default() += 1;

        match assignment.matched {
            Some(matched) => {
                let clause = &PATH_RULES[matched.rule].clauses[matched.clause];
                for condition in clause.conditions {
                    *edge_counts
                        .entry(answer_edge_id(matched, condition.question))
                        .or_default() += 1;
                }
            }
            None => *edge_counts.entry(FALLBACK_EDGE_ID.to_string()).or_default() += 1,
        }
    }

    for edge in &mut graph.edges {
        if edge.kind != EdgeKind::Sequence {
            edge.count = Some(edge_counts.get(&edge.id).copied().unwrap_or(0));
        }
    }
    for node in &mut graph.nodes {
        if let Some(path) = node.path {
            node.count = Some(path_counts.get(&path).copied().unwrap_or(0));
        }
    }
    graph.records_processed = Some(records.len());
}
