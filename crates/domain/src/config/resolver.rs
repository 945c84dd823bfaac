use serde::{Deserialize, Serialize};

/// External resolver invocation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Resolver binary, looked up on PATH unless absolute (default: "dig")
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Per-try timeout handed to the resolver as `+time=N` (default: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Wall-clock ceiling for a single subprocess; the child is killed and the
    /// query reported as timed out once it elapses (default: 30)
    #[serde(default = "default_process_guard_secs")]
    pub process_guard_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            timeout_secs: default_timeout_secs(),
            process_guard_secs: default_process_guard_secs(),
        }
    }
}

fn default_binary() -> String {
    "dig".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_process_guard_secs() -> u64 {
    30
}
