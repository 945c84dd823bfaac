use super::{DnsRecord, QuerySpec, RecordType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Terminal outcome of a single resolver invocation.
///
/// Protocol outcomes (`NameNotFound`, `ServerFailure`, `Refused`) are normal
/// DNS answers and live here rather than in [`crate::DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Success,
    NameNotFound,
    ServerFailure,
    Refused,
    Timeout,
    /// The resolver process could not be spawned.
    SystemError,
    /// Non-zero exit the classifier could not attribute to anything more specific.
    Failed,
}

impl QueryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryStatus::Success => "success",
            QueryStatus::NameNotFound => "name_not_found",
            QueryStatus::ServerFailure => "server_failure",
            QueryStatus::Refused => "refused",
            QueryStatus::Timeout => "timeout",
            QueryStatus::SystemError => "system_error",
            QueryStatus::Failed => "failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryStatus::Success)
    }

    /// Outcomes that point at server or transport trouble rather than at the
    /// queried name. Adaptive concurrency only counts these as errors.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            QueryStatus::ServerFailure
                | QueryStatus::Refused
                | QueryStatus::Timeout
                | QueryStatus::SystemError
                | QueryStatus::Failed
        )
    }

    /// Short, sanitized description safe to show to a user.
    pub fn summary(&self) -> &'static str {
        match self {
            QueryStatus::Success => "Query succeeded",
            QueryStatus::NameNotFound => "Domain does not exist",
            QueryStatus::ServerFailure => "Server failed to answer",
            QueryStatus::Refused => "Server refused the query",
            QueryStatus::Timeout => "Query timed out",
            QueryStatus::SystemError => "Could not start the resolver",
            QueryStatus::Failed => "Resolver reported an error",
        }
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Complete result of one query. Exactly one terminal status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub spec: QuerySpec,
    pub status: QueryStatus,
    /// Wall-clock time measured around the subprocess
    pub elapsed_ms: f64,
    pub queried_at: DateTime<Utc>,
    #[serde(default)]
    pub answer: Vec<DnsRecord>,
    #[serde(default)]
    pub authority: Vec<DnsRecord>,
    #[serde(default)]
    pub additional: Vec<DnsRecord>,
    /// Query time reported by the resolver itself (`;; Query time:`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_query_time_ms: Option<u64>,
    /// Server that answered, as reported by the resolver (`;; SERVER:`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responding_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    /// Number of malformed output lines that were skipped.
    #[serde(default)]
    pub parse_warnings: usize,
    #[serde(default)]
    pub raw_output: String,
}

impl QueryResult {
    /// Result carrying only a status, no records (spawn failure, guard timeout).
    pub fn bare(spec: QuerySpec, status: QueryStatus, elapsed_ms: f64) -> Self {
        Self {
            spec,
            status,
            elapsed_ms,
            queried_at: Utc::now(),
            answer: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            reported_query_time_ms: None,
            responding_server: None,
            exit_code: None,
            parse_warnings: 0,
            raw_output: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn total_records(&self) -> usize {
        self.answer.len() + self.authority.len() + self.additional.len()
    }

    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Label of the target this result belongs to (server for comparisons).
    pub fn target(&self) -> String {
        self.spec.target_label()
    }
}

/// Same query asked of many servers, side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub per_server_results: Vec<QueryResult>,
    pub discrepancy_found: bool,
}

impl ComparisonResult {
    pub fn successes(&self) -> usize {
        self.per_server_results
            .iter()
            .filter(|r| r.is_success())
            .count()
    }

    pub fn failures(&self) -> usize {
        self.per_server_results.len() - self.successes()
    }

    pub fn result_for(&self, server: &str) -> Option<&QueryResult> {
        self.per_server_results
            .iter()
            .find(|r| r.spec.server.as_deref() == Some(server))
    }
}
