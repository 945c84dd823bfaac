use crate::ports::QueryExecutor;
use digger_domain::{validate_query, DomainError, QueryResult, QuerySpec};
use std::sync::Arc;
use tracing::debug;

/// Use case: run a single lookup.
pub struct SubmitQueryUseCase {
    executor: Arc<dyn QueryExecutor>,
}

impl SubmitQueryUseCase {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    /// Invalid input and a missing resolver fail before any process is spawned.
    /// Every other outcome is reported through the result's status.
    pub async fn execute(&self, spec: QuerySpec) -> Result<QueryResult, DomainError> {
        validate_query(&spec)?;

        if !self.executor.is_available().await {
            return Err(DomainError::ResolverUnavailable);
        }

        debug!(query = %spec, "Submitting query");
        Ok(self.executor.execute(&spec).await)
    }
}
