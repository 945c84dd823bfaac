use crate::services::{DispatchMode, Orchestrator, RunHandle, RunReport};
use digger_domain::{validate_query, DomainError, QuerySpec};
use std::sync::Arc;
use tracing::info;

/// Use case: bulk lookups over many specs.
pub struct SubmitBatchUseCase {
    orchestrator: Arc<Orchestrator>,
}

impl SubmitBatchUseCase {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Validate every spec, then hand the batch to the orchestrator.
    /// The first invalid spec rejects the whole batch.
    pub async fn execute(
        &self,
        specs: Vec<QuerySpec>,
        mode: DispatchMode,
        concurrency: Option<usize>,
    ) -> Result<RunHandle<RunReport>, DomainError> {
        if specs.is_empty() {
            return Err(DomainError::EmptyBatch);
        }
        for spec in &specs {
            validate_query(spec)?;
        }

        if !self.orchestrator.executor().is_available().await {
            return Err(DomainError::ResolverUnavailable);
        }

        info!(queries = specs.len(), mode = ?mode, "Batch submitted");
        Ok(self.orchestrator.start(specs, mode, concurrency))
    }
}
