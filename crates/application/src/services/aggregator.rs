use digger_domain::QueryResult;
use serde::Serialize;
use std::collections::BTreeSet;

/// Elapsed-time figures over the successful results of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingStats {
    pub fastest_ms: f64,
    pub fastest_target: String,
    pub slowest_ms: f64,
    pub slowest_target: String,
    pub average_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub total: usize,
    pub successes: usize,
    pub failures: usize,
    /// `None` when no result succeeded.
    pub timing: Option<TimingStats>,
}

impl RunStats {
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.successes as f64 / self.total as f64
        }
    }
}

/// Compute success counts and timing over a completed set of results.
pub fn aggregate(results: &[QueryResult]) -> RunStats {
    let successful: Vec<&QueryResult> = results.iter().filter(|r| r.is_success()).collect();

    let timing = successful
        .iter()
        .copied()
        .fold(None::<(&QueryResult, &QueryResult, f64)>, |acc, r| match acc {
            None => Some((r, r, r.elapsed_ms)),
            Some((fastest, slowest, sum)) => Some((
                if r.elapsed_ms < fastest.elapsed_ms { r } else { fastest },
                if r.elapsed_ms > slowest.elapsed_ms { r } else { slowest },
                sum + r.elapsed_ms,
            )),
        })
        .map(|(fastest, slowest, sum)| TimingStats {
            fastest_ms: fastest.elapsed_ms,
            fastest_target: fastest.target(),
            slowest_ms: slowest.elapsed_ms,
            slowest_target: slowest.target(),
            average_ms: sum / successful.len() as f64,
        });

    RunStats {
        total: results.len(),
        successes: successful.len(),
        failures: results.len() - successful.len(),
        timing,
    }
}

/// Normalized, order-independent view of a result's answer values.
pub fn answer_set(result: &QueryResult) -> BTreeSet<String> {
    result
        .answer
        .iter()
        .map(|record| record.normalized_value())
        .collect()
}

/// True when two successful results disagree on their answer set.
/// Failed results never take part; record order never matters.
pub fn detect_discrepancy(results: &[QueryResult]) -> bool {
    let mut sets = results.iter().filter(|r| r.is_success()).map(answer_set);
    match sets.next() {
        Some(first) => sets.any(|set| set != first),
        None => false,
    }
}
