pub mod adaptive_concurrency;
pub mod aggregator;
pub mod orchestrator;
pub mod run_handle;

pub use adaptive_concurrency::{AdaptiveConcurrency, TuningDecision};
pub use aggregator::{aggregate, answer_set, detect_discrepancy, RunStats, TimingStats};
pub use orchestrator::{DispatchMode, Orchestrator, RunReport};
pub use run_handle::{Progress, RunControl, RunHandle, RunState};
