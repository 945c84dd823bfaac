use crate::services::{
    detect_discrepancy, DispatchMode, Orchestrator, RunHandle, RunReport, RunState, RunStats,
};
use digger_domain::{
    validate_query, ComparisonResult, DomainError, QueryFlags, QuerySpec, RecordType,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Outcome of a comparison run
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub state: RunState,
    pub comparison: ComparisonResult,
    pub stats: RunStats,
}

impl ComparisonReport {
    fn from_run(domain: Arc<str>, record_type: RecordType, report: RunReport) -> Self {
        let discrepancy_found = detect_discrepancy(&report.results);
        if discrepancy_found {
            info!(domain = %domain, record_type = %record_type, "Servers disagree on answer set");
        }
        Self {
            state: report.state,
            comparison: ComparisonResult {
                domain,
                record_type,
                per_server_results: report.results,
                discrepancy_found,
            },
            stats: report.stats,
        }
    }
}

/// Use case: ask one question of many servers side by side.
pub struct SubmitComparisonUseCase {
    orchestrator: Arc<Orchestrator>,
}

impl SubmitComparisonUseCase {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self { orchestrator }
    }

    pub async fn execute(
        &self,
        domain: &str,
        record_type: RecordType,
        servers: &[String],
        flags: QueryFlags,
    ) -> Result<RunHandle<ComparisonReport>, DomainError> {
        if servers.is_empty() {
            return Err(DomainError::EmptyBatch);
        }

        let domain: Arc<str> = Arc::from(domain);
        let specs: Vec<QuerySpec> = servers
            .iter()
            .map(|server| {
                QuerySpec::new(Arc::clone(&domain), record_type)
                    .with_server(server.as_str())
                    .with_flags(flags)
            })
            .collect();
        for spec in &specs {
            validate_query(spec)?;
        }

        if !self.orchestrator.executor().is_available().await {
            return Err(DomainError::ResolverUnavailable);
        }

        info!(
            domain = %domain,
            record_type = %record_type,
            servers = specs.len(),
            "Comparison submitted"
        );

        // one server per slot; the orchestrator clamps this into its bounds
        let concurrency = Some(specs.len());
        let handle = self
            .orchestrator
            .start(specs, DispatchMode::BoundedParallel, concurrency);
        Ok(handle.map(move |report| ComparisonReport::from_run(domain, record_type, report)))
    }
}
