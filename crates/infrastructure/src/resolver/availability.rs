use std::future::Future;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Process-lifetime answer to "can the resolver binary be run?".
///
/// The first caller runs the probe; concurrent callers wait for that same
/// probe, and every later call returns the stored answer without I/O. A
/// resolver installed or removed mid-session is not noticed until restart.
#[derive(Debug)]
pub struct AvailabilityCache {
    binary: String,
    available: OnceCell<bool>,
}

impl AvailabilityCache {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            available: OnceCell::new(),
        }
    }

    pub async fn is_available(&self) -> bool {
        self.is_available_with(|| probe(&self.binary)).await
    }

    /// Same single-flight semantics with a caller-supplied probe.
    pub async fn is_available_with<F, Fut>(&self, probe: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = bool>,
    {
        *self.available.get_or_init(probe).await
    }

    /// Stored answer, if the probe has already run.
    pub fn cached(&self) -> Option<bool> {
        self.available.get().copied()
    }
}

/// Spawn `binary -v`. Any exit status counts: the version flag exits non-zero
/// on some builds, and only a failed spawn means the binary is missing.
async fn probe(binary: &str) -> bool {
    let child = Command::new(binary)
        .arg("-v")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(e) => {
            warn!(binary = %binary, error = %e, "Resolver binary not available");
            return false;
        }
    };

    match tokio::time::timeout(PROBE_TIMEOUT, child.wait()).await {
        Ok(Ok(status)) => {
            info!(binary = %binary, exit_code = ?status.code(), "Resolver binary available");
            true
        }
        Ok(Err(e)) => {
            warn!(binary = %binary, error = %e, "Resolver probe failed");
            false
        }
        Err(_) => {
            debug!(binary = %binary, "Resolver probe timed out");
            false
        }
    }
}
