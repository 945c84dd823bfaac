use super::adaptive_concurrency::AdaptiveConcurrency;
use super::aggregator::{aggregate, RunStats};
use super::run_handle::{Progress, RunControl, RunHandle, RunState};
use crate::ports::QueryExecutor;
use digger_domain::config::OrchestratorConfig;
use digger_domain::{ConfigError, DomainError, QueryResult, QuerySpec};
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// One query at a time, yielding to the scheduler between queries.
    Sequential,
    /// Up to the adaptive bound in flight, multiplexed on one task.
    BoundedParallel,
}

/// Final account of an orchestration run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub state: RunState,
    pub mode: DispatchMode,
    pub total: usize,
    pub dispatched: usize,
    /// Completion order, one entry per dispatched target.
    pub results: Vec<QueryResult>,
    pub stats: RunStats,
    pub final_concurrency: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Drives many queries against an executor with bounded, adaptive concurrency.
pub struct Orchestrator {
    executor: Arc<dyn QueryExecutor>,
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Fails when the concurrency bounds or error-rate thresholds are unusable.
    pub fn new(
        executor: Arc<dyn QueryExecutor>,
        config: OrchestratorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { executor, config })
    }

    pub fn executor(&self) -> Arc<dyn QueryExecutor> {
        Arc::clone(&self.executor)
    }

    /// Prepare a run over `targets`. The returned handle's outcome future
    /// performs the work when polled.
    pub fn start(
        &self,
        targets: Vec<QuerySpec>,
        mode: DispatchMode,
        concurrency: Option<usize>,
    ) -> RunHandle<RunReport> {
        let (progress_tx, progress_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(RunState::Idle);
        let cancel = CancellationToken::new();

        let initial = concurrency.unwrap_or(self.config.default_concurrency);
        let run = OrchestrationRun {
            executor: Arc::clone(&self.executor),
            concurrency: AdaptiveConcurrency::new(&self.config, initial),
            total: targets.len(),
            targets,
            mode,
            completed: 0,
            dispatched: 0,
            cancelled: false,
            results: Vec::new(),
            progress: progress_tx,
            state: state_tx,
            cancel: cancel.clone(),
        };

        RunHandle::new(progress_rx, RunControl::new(cancel, state_rx), run.drive())
    }
}

/// State of one run. Owned by the outcome future; nothing else writes to it.
struct OrchestrationRun {
    executor: Arc<dyn QueryExecutor>,
    concurrency: AdaptiveConcurrency,
    targets: Vec<QuerySpec>,
    total: usize,
    mode: DispatchMode,
    completed: usize,
    dispatched: usize,
    cancelled: bool,
    results: Vec<QueryResult>,
    progress: mpsc::UnboundedSender<Progress>,
    state: watch::Sender<RunState>,
    cancel: CancellationToken,
}

impl OrchestrationRun {
    async fn drive(mut self) -> RunReport {
        self.set_state(RunState::Running);
        info!(
            total = self.total,
            mode = ?self.mode,
            concurrency = self.concurrency.current(),
            "Orchestration run started"
        );

        if !self.executor.is_available().await {
            warn!("Resolver unavailable, failing run before dispatch");
            return self.finish(Some(DomainError::ResolverUnavailable));
        }

        let targets = std::mem::take(&mut self.targets);
        match self.mode {
            DispatchMode::Sequential => self.run_sequential(targets).await,
            DispatchMode::BoundedParallel => self.run_parallel(targets).await,
        }

        self.finish(None)
    }

    async fn run_sequential(&mut self, targets: Vec<QuerySpec>) {
        for spec in targets {
            if self.cancel.is_cancelled() {
                self.cancelled = true;
                break;
            }
            self.dispatched += 1;
            let result = self.executor.execute(&spec).await;
            self.record(result);
            tokio::task::yield_now().await;
        }
    }

    async fn run_parallel(&mut self, targets: Vec<QuerySpec>) {
        let mut pending = targets.into_iter();
        let mut in_flight: FuturesUnordered<BoxFuture<'static, QueryResult>> =
            FuturesUnordered::new();

        loop {
            while in_flight.len() < self.concurrency.current() && !pending.as_slice().is_empty() {
                if self.cancel.is_cancelled() {
                    self.cancelled = true;
                    break;
                }
                if let Some(spec) = pending.next() {
                    self.dispatched += 1;
                    let executor = Arc::clone(&self.executor);
                    in_flight.push(async move { executor.execute(&spec).await }.boxed());
                }
            }

            match in_flight.next().await {
                Some(result) => {
                    let is_error = result.status.is_transport_error();
                    self.record(result);
                    self.concurrency.record(is_error);
                }
                None => break,
            }
        }
    }

    fn record(&mut self, result: QueryResult) {
        self.completed += 1;
        debug_assert!(self.completed <= self.total);
        debug!(
            query = %result.target(),
            status = %result.status,
            elapsed_ms = result.elapsed_ms,
            completed = self.completed,
            total = self.total,
            "Query completed"
        );

        // receiver may be gone; progress is best-effort
        let _ = self.progress.send(Progress {
            completed: self.completed,
            total: self.total,
            target: result.target(),
            status: result.status,
        });
        self.results.push(result);
    }

    fn set_state(&self, state: RunState) {
        self.state.send_replace(state);
    }

    fn finish(self, failure: Option<DomainError>) -> RunReport {
        let state = match (&failure, self.cancelled) {
            (Some(_), _) => RunState::Failed,
            (None, true) => RunState::Cancelled,
            (None, false) => RunState::Completed,
        };
        self.set_state(state);

        let stats = aggregate(&self.results);
        info!(
            state = ?state,
            completed = self.completed,
            total = self.total,
            successes = stats.successes,
            failures = stats.failures,
            "Orchestration run finished"
        );

        RunReport {
            state,
            mode: self.mode,
            total: self.total,
            dispatched: self.dispatched,
            final_concurrency: self.concurrency.current(),
            results: self.results,
            stats,
            failure: failure.map(|e| e.to_string()),
        }
    }
}
