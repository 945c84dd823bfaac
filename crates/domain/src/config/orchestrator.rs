use super::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Bounded-parallel dispatch and adaptive tuning settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrchestratorConfig {
    /// Lower concurrency bound (default: 3)
    #[serde(default = "default_min_concurrency")]
    pub min_concurrency: usize,

    /// Upper concurrency bound (default: 10)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Starting bound when the caller does not pass one (default: 5)
    #[serde(default = "default_concurrency")]
    pub default_concurrency: usize,

    /// Number of recent completions the error rate is computed over (default: 20)
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Error rate below which concurrency grows by one (default: 0.05)
    #[serde(default = "default_low_error_rate")]
    pub low_error_rate: f64,

    /// Error rate above which concurrency shrinks by one (default: 0.20)
    #[serde(default = "default_high_error_rate")]
    pub high_error_rate: f64,
}

impl OrchestratorConfig {
    /// Clamp a requested bound into `[min_concurrency, max_concurrency]`.
    pub fn clamp(&self, requested: usize) -> usize {
        requested.clamp(self.min_concurrency, self.max_concurrency)
    }

    /// Reject bounds and thresholds the adaptive controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_concurrency == 0 {
            return Err(ConfigError::Validation(
                "orchestrator.min_concurrency must be at least 1".into(),
            ));
        }
        if self.min_concurrency > self.max_concurrency {
            return Err(ConfigError::Validation(format!(
                "orchestrator.min_concurrency ({}) exceeds max_concurrency ({})",
                self.min_concurrency, self.max_concurrency
            )));
        }
        if self.window_size == 0 {
            return Err(ConfigError::Validation(
                "orchestrator.window_size must be greater than zero".into(),
            ));
        }
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(self.low_error_rate) || !in_unit(self.high_error_rate) {
            return Err(ConfigError::Validation(
                "orchestrator error-rate thresholds must lie within [0, 1]".into(),
            ));
        }
        if self.low_error_rate >= self.high_error_rate {
            return Err(ConfigError::Validation(format!(
                "orchestrator.low_error_rate ({}) must be below high_error_rate ({})",
                self.low_error_rate, self.high_error_rate
            )));
        }

        Ok(())
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            min_concurrency: default_min_concurrency(),
            max_concurrency: default_max_concurrency(),
            default_concurrency: default_concurrency(),
            window_size: default_window_size(),
            low_error_rate: default_low_error_rate(),
            high_error_rate: default_high_error_rate(),
        }
    }
}

fn default_min_concurrency() -> usize {
    3
}

fn default_max_concurrency() -> usize {
    10
}

fn default_concurrency() -> usize {
    5
}

fn default_window_size() -> usize {
    20
}

fn default_low_error_rate() -> f64 {
    0.05
}

fn default_high_error_rate() -> f64 {
    0.20
}
