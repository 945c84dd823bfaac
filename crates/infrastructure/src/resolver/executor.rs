use super::availability::AvailabilityCache;
use super::command::build_args;
use crate::parser::{classify, OutputParser};
use async_trait::async_trait;
use digger_application::ports::QueryExecutor;
use digger_domain::config::ResolverConfig;
use digger_domain::{QueryResult, QuerySpec, QueryStatus};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs the external resolver as a subprocess, one process per query.
pub struct DigExecutor {
    config: ResolverConfig,
    availability: AvailabilityCache,
}

impl DigExecutor {
    pub fn new(config: ResolverConfig) -> Self {
        let availability = AvailabilityCache::new(config.binary.clone());
        Self {
            config,
            availability,
        }
    }

    fn elapsed_ms(started: Instant) -> f64 {
        started.elapsed().as_secs_f64() * 1000.0
    }
}

#[async_trait]
impl QueryExecutor for DigExecutor {
    async fn execute(&self, spec: &QuerySpec) -> QueryResult {
        let args = build_args(spec, self.config.timeout_secs);
        debug!(binary = %self.config.binary, args = ?args, "Spawning resolver");

        let started = Instant::now();
        let child = Command::new(&self.config.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                warn!(binary = %self.config.binary, error = %e, "Failed to spawn resolver");
                return QueryResult::bare(
                    spec.clone(),
                    QueryStatus::SystemError,
                    Self::elapsed_ms(started),
                );
            }
        };

        // dropping the child on guard expiry kills it
        let guard = Duration::from_secs(self.config.process_guard_secs);
        let output = match tokio::time::timeout(guard, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                warn!(query = %spec, error = %e, "Failed to collect resolver output");
                return QueryResult::bare(
                    spec.clone(),
                    QueryStatus::SystemError,
                    Self::elapsed_ms(started),
                );
            }
            Err(_) => {
                warn!(
                    query = %spec,
                    guard_secs = self.config.process_guard_secs,
                    "Resolver exceeded process guard, killed"
                );
                return QueryResult::bare(
                    spec.clone(),
                    QueryStatus::Timeout,
                    Self::elapsed_ms(started),
                );
            }
        };
        let elapsed_ms = Self::elapsed_ms(started);

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        let exit_code = output.status.code();

        if !stderr.trim().is_empty() {
            debug!(query = %spec, exit_code = ?exit_code, stderr = %stderr.trim(), "Resolver stderr");
        }

        let parsed = OutputParser::parse(&stdout, spec);
        let status = classify(parsed.status, exit_code, &stdout, &stderr);

        if !status.is_success() {
            debug!(query = %spec, status = %status, exit_code = ?exit_code, "Query did not succeed");
        }

        let mut result = QueryResult::bare(spec.clone(), status, elapsed_ms);
        result.answer = parsed.answer;
        result.authority = parsed.authority;
        result.additional = parsed.additional;
        result.reported_query_time_ms = parsed.query_time_ms;
        result.responding_server = parsed.server;
        result.exit_code = exit_code;
        result.parse_warnings = parsed.warnings;
        result.raw_output = stdout;
        result
    }

    async fn is_available(&self) -> bool {
        self.availability.is_available().await
    }
}
