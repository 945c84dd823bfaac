pub mod mock_executor;

pub use mock_executor::{shared, spec, MockQueryExecutor, MockResponse};

use digger_application::services::Orchestrator;
use digger_domain::config::OrchestratorConfig;
use std::sync::Arc;

/// Orchestrator over `executor` with the default bounds.
pub fn default_orchestrator(executor: Arc<MockQueryExecutor>) -> Orchestrator {
    Orchestrator::new(executor, OrchestratorConfig::default()).unwrap()
}
