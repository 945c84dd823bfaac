#![allow(dead_code)]

use async_trait::async_trait;
use digger_application::ports::QueryExecutor;
use digger_domain::{DnsRecord, QueryResult, QuerySpec, QueryStatus, RecordType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

// ============================================================================
// Mock QueryExecutor
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: QueryStatus,
    pub elapsed_ms: f64,
    pub answers: Vec<String>,
    /// Scheduler yields before completing; more yields = later completion.
    pub yields: usize,
}

impl MockResponse {
    pub fn success(elapsed_ms: f64, answers: &[&str]) -> Self {
        Self {
            status: QueryStatus::Success,
            elapsed_ms,
            answers: answers.iter().map(|a| a.to_string()).collect(),
            yields: 0,
        }
    }

    pub fn status(status: QueryStatus) -> Self {
        Self {
            status,
            elapsed_ms: 1.0,
            answers: Vec::new(),
            yields: 0,
        }
    }

    pub fn with_yields(mut self, yields: usize) -> Self {
        self.yields = yields;
        self
    }
}

/// Executor stand-in keyed by target label (`domain` or `domain@server`).
pub struct MockQueryExecutor {
    responses: HashMap<String, MockResponse>,
    default: MockResponse,
    available: bool,
    calls: AtomicUsize,
    availability_checks: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    executed: Mutex<Vec<String>>,
    cancel_after: Mutex<Option<(usize, CancellationToken)>>,
}

impl MockQueryExecutor {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default: MockResponse::success(10.0, &["192.0.2.1"]),
            available: true,
            calls: AtomicUsize::new(0),
            availability_checks: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
            executed: Mutex::new(Vec::new()),
            cancel_after: Mutex::new(None),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn with_response(mut self, target: &str, response: MockResponse) -> Self {
        self.responses.insert(target.to_string(), response);
        self
    }

    pub fn with_default(mut self, response: MockResponse) -> Self {
        self.default = response;
        self
    }

    /// Cancel `token` from inside the `n`-th call (1-based), before it completes.
    pub fn cancel_on_call(&self, n: usize, token: CancellationToken) {
        *self.cancel_after.lock().unwrap() = Some((n, token));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn availability_checks(&self) -> usize {
        self.availability_checks.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl Default for MockQueryExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryExecutor for MockQueryExecutor {
    async fn execute(&self, spec: &QuerySpec) -> QueryResult {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.executed.lock().unwrap().push(spec.target_label());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some((n, token)) = self.cancel_after.lock().unwrap().as_ref() {
            if call == *n {
                token.cancel();
            }
        }

        let response = self
            .responses
            .get(&spec.target_label())
            .cloned()
            .unwrap_or_else(|| self.default.clone());

        for _ in 0..response.yields {
            tokio::task::yield_now().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let mut result = QueryResult::bare(spec.clone(), response.status, response.elapsed_ms);
        result.answer = response
            .answers
            .iter()
            .map(|value| DnsRecord::new(spec.domain.to_string(), 300, spec.record_type, value.clone()))
            .collect();
        result
    }

    async fn is_available(&self) -> bool {
        self.availability_checks.fetch_add(1, Ordering::SeqCst);
        self.available
    }
}

pub fn spec(domain: &str) -> QuerySpec {
    QuerySpec::new(domain, RecordType::A)
}

pub fn shared(executor: MockQueryExecutor) -> Arc<MockQueryExecutor> {
    Arc::new(executor)
}
