//! BuildDecisionGraphHandler - Query handler for the admin audit diagram.

use std::sync::Arc;

use crate::domain::analytics::{DecisionGraph, DecisionGraphBuilder};
use crate::domain::foundation::DomainError;
use crate::ports::QuizHistoryReader;

/// Query for the decision graph.
#[derive(Debug, Clone, Default)]
pub struct BuildDecisionGraphQuery {
    /// Annotate edges with counts from historical submissions.
    pub include_history: bool,
}

/// Handler for building the decision graph.
pub struct BuildDecisionGraphHandler {
    history: Arc<dyn QuizHistoryReader>,
    builder: DecisionGraphBuilder<'static>,
    max_history_records: usize,
}

impl BuildDecisionGraphHandler {
    pub fn new(history: Arc<dyn QuizHistoryReader>, max_history_records: usize) -> Self {
        Self {
            history,
            builder: DecisionGraphBuilder::default(),
            max_history_records,
        }
    }

    pub async fn handle(&self, query: BuildDecisionGraphQuery) -> Result<DecisionGraph, DomainError> {
        if !query.include_history {
            return Ok(self.builder.build(None));
        }

        let records = self.history.list_answers(self.max_history_records).await?;
        Ok(self.builder.build(Some(records.as_slice())))
    }
}
