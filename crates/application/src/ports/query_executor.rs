use async_trait::async_trait;
use digger_domain::{QueryResult, QuerySpec};

/// Runs one query against the external resolver.
///
/// `execute` never fails at the language level: spawn failures, timeouts and
/// DNS error codes all come back as the result's status.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, spec: &QuerySpec) -> QueryResult;

    /// Whether the resolver binary can be run at all. Implementations cache
    /// the answer for the lifetime of the process.
    async fn is_available(&self) -> bool;
}
