use digger_application::services::{Progress, RunHandle};
use tracing::{info, warn};

fn log_progress(event: &Progress) {
    info!(
        completed = event.completed,
        total = event.total,
        query = %event.target,
        status = %event.status,
        "Progress"
    );
}

/// Drive a run to its end on this task, logging progress and turning the
/// first Ctrl-C into a cooperative cancel.
pub(crate) async fn drive<T: Send + 'static>(handle: RunHandle<T>) -> T {
    let control = handle.control();
    let (mut progress, mut outcome) = handle.into_parts();
    let mut interrupted = false;

    loop {
        tokio::select! {
            biased;

            Some(event) = progress.recv() => log_progress(&event),
            _ = tokio::signal::ctrl_c(), if !interrupted => {
                warn!("Interrupt received, letting in-flight queries finish");
                control.cancel();
                interrupted = true;
            }
            report = &mut outcome => {
                while let Ok(event) = progress.try_recv() {
                    log_progress(&event);
                }
                return report;
            }
        }
    }
}
