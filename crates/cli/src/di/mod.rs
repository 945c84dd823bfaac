use digger_application::ports::QueryExecutor;
use digger_application::services::Orchestrator;
use digger_application::use_cases::{
    SubmitBatchUseCase, SubmitComparisonUseCase, SubmitQueryUseCase,
};
use digger_domain::{Config, ConfigError};
use digger_infrastructure::DigExecutor;
use std::sync::Arc;

/// Use cases wired against the subprocess resolver.
pub struct UseCases {
    pub query: SubmitQueryUseCase,
    pub batch: SubmitBatchUseCase,
    pub comparison: SubmitComparisonUseCase,
}

impl UseCases {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let executor: Arc<dyn QueryExecutor> =
            Arc::new(DigExecutor::new(config.resolver.clone()));
        let orchestrator = Arc::new(Orchestrator::new(
            Arc::clone(&executor),
            config.orchestrator.clone(),
        )?);

        Ok(Self {
            query: SubmitQueryUseCase::new(executor),
            batch: SubmitBatchUseCase::new(Arc::clone(&orchestrator)),
            comparison: SubmitComparisonUseCase::new(orchestrator),
        })
    }
}
