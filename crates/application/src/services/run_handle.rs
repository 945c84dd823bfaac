use digger_domain::QueryStatus;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Serialize;
use std::future::Future;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

/// Lifecycle of an orchestration run. Terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::Cancelled | RunState::Failed
        )
    }
}

/// Emitted after every individual completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub target: String,
    pub status: QueryStatus,
}

/// Cloneable remote control for a running orchestration.
#[derive(Debug, Clone)]
pub struct RunControl {
    cancel: CancellationToken,
    state: watch::Receiver<RunState>,
}

impl RunControl {
    pub(crate) fn new(cancel: CancellationToken, state: watch::Receiver<RunState>) -> Self {
        Self { cancel, state }
    }

    /// Request cooperative cancellation: nothing new is dispatched, in-flight
    /// queries finish and are reported.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> RunState {
        *self.state.borrow()
    }
}

/// Progress stream, control and outcome future of one run.
///
/// Nothing happens until the outcome future is polled; it drives every
/// query on the caller's task.
pub struct RunHandle<T> {
    progress: mpsc::UnboundedReceiver<Progress>,
    control: RunControl,
    outcome: BoxFuture<'static, T>,
}

impl<T: Send + 'static> RunHandle<T> {
    pub(crate) fn new(
        progress: mpsc::UnboundedReceiver<Progress>,
        control: RunControl,
        outcome: impl Future<Output = T> + Send + 'static,
    ) -> Self {
        Self {
            progress,
            control,
            outcome: outcome.boxed(),
        }
    }

    pub fn control(&self) -> RunControl {
        self.control.clone()
    }

    pub fn cancel(&self) {
        self.control.cancel();
    }

    pub fn state(&self) -> RunState {
        self.control.state()
    }

    /// Drive the run to its end, discarding progress events.
    pub async fn outcome(self) -> T {
        self.outcome.await
    }

    pub fn into_parts(self) -> (mpsc::UnboundedReceiver<Progress>, BoxFuture<'static, T>) {
        (self.progress, self.outcome)
    }

    /// Transform the final outcome, keeping progress and control intact.
    pub fn map<U, F>(self, f: F) -> RunHandle<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        RunHandle {
            progress: self.progress,
            control: self.control,
            outcome: self.outcome.map(f).boxed(),
        }
    }
}
