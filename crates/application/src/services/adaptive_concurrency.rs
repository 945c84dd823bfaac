use digger_domain::config::OrchestratorConfig;
use std::collections::VecDeque;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningDecision {
    Increase { from: usize, to: usize },
    Decrease { from: usize, to: usize },
    Hold,
}

/// Error-rate driven concurrency bound over a rolling window of completions.
///
/// The bound moves by at most one per completion and never leaves
/// `[min, max]`.
#[derive(Debug, Clone)]
pub struct AdaptiveConcurrency {
    window: VecDeque<bool>,
    window_size: usize,
    min: usize,
    max: usize,
    low_error_rate: f64,
    high_error_rate: f64,
    current: usize,
}

impl AdaptiveConcurrency {
    pub fn new(config: &OrchestratorConfig, initial: usize) -> Self {
        let window_size = config.window_size.max(1);
        Self {
            window: VecDeque::with_capacity(window_size),
            window_size,
            min: config.min_concurrency,
            max: config.max_concurrency,
            low_error_rate: config.low_error_rate,
            high_error_rate: config.high_error_rate,
            current: config.clamp(initial),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Fraction of errors among the completions currently in the window.
    pub fn error_rate(&self) -> f64 {
        if self.window.is_empty() {
            return 0.0;
        }
        let errors = self.window.iter().filter(|&&is_error| is_error).count();
        errors as f64 / self.window.len() as f64
    }

    /// Record one completion and run a tuning step.
    pub fn record(&mut self, is_error: bool) -> TuningDecision {
        if self.window.len() == self.window_size {
            self.window.pop_front();
        }
        self.window.push_back(is_error);
        self.tune()
    }

    fn tune(&mut self) -> TuningDecision {
        let rate = self.error_rate();
        let from = self.current;

        let decision = if rate < self.low_error_rate && from < self.max {
            self.current = from + 1;
            TuningDecision::Increase {
                from,
                to: self.current,
            }
        } else if rate > self.high_error_rate && from > self.min {
            self.current = from - 1;
            TuningDecision::Decrease {
                from,
                to: self.current,
            }
        } else {
            TuningDecision::Hold
        };

        match decision {
            TuningDecision::Increase { from, to } => {
                info!(from, to, error_rate = rate, "Raising concurrency");
            }
            TuningDecision::Decrease { from, to } => {
                info!(from, to, error_rate = rate, "Lowering concurrency");
            }
            TuningDecision::Hold => {
                debug!(current = from, error_rate = rate, "Holding concurrency");
            }
        }

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OrchestratorConfig {
        OrchestratorConfig::default()
    }

    #[test]
    fn test_initial_bound_is_clamped() {
        assert_eq!(AdaptiveConcurrency::new(&config(), 1).current(), 3);
        assert_eq!(AdaptiveConcurrency::new(&config(), 50).current(), 10);
        assert_eq!(AdaptiveConcurrency::new(&config(), 6).current(), 6);
    }

    #[test]
    fn test_all_success_climbs_to_max() {
        let mut ac = AdaptiveConcurrency::new(&config(), 3);
        for _ in 0..100 {
            ac.record(false);
            assert!(ac.current() <= 10);
        }
        assert_eq!(ac.current(), 10);
        assert_eq!(ac.record(false), TuningDecision::Hold);
    }

    #[test]
    fn test_high_error_rate_descends_to_min() {
        let mut ac = AdaptiveConcurrency::new(&config(), 10);
        for _ in 0..100 {
            ac.record(true);
            assert!(ac.current() >= 3);
        }
        assert_eq!(ac.current(), 3);
    }

    #[test]
    fn test_decrease_on_next_step_after_threshold() {
        let mut ac = AdaptiveConcurrency::new(&config(), 8);
        // 16 successes, then failures until the window holds >20% errors
        for _ in 0..16 {
            ac.record(false);
        }
        assert_eq!(ac.current(), 10);

        // 4 errors in a full window of 20 = exactly 20%, not above
        for _ in 0..3 {
            ac.record(true);
        }
        assert_eq!(ac.record(true), TuningDecision::Hold);
        assert!((ac.error_rate() - 0.20).abs() < f64::EPSILON);

        // fifth error pushes the rate to 25%
        assert_eq!(
            ac.record(true),
            TuningDecision::Decrease { from: 10, to: 9 }
        );
    }

    #[test]
    fn test_moderate_error_rate_holds() {
        let mut ac = AdaptiveConcurrency::new(&config(), 5);
        // 1 error in 10 = 10%: between thresholds
        for i in 0..10 {
            ac.record(i == 0);
        }
        let before = ac.current();
        assert_eq!(ac.record(false), TuningDecision::Hold);
        assert_eq!(ac.current(), before);
    }

    #[test]
    fn test_window_forgets_old_completions() {
        let mut ac = AdaptiveConcurrency::new(&config(), 5);
        for _ in 0..20 {
            ac.record(true);
        }
        assert_eq!(ac.error_rate(), 1.0);
        for _ in 0..20 {
            ac.record(false);
        }
        assert_eq!(ac.error_rate(), 0.0);
    }
}
