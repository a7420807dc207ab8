use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use super::BindingError;
use crate::domain::normalize;

/// Coalesces display edits into model writes.
///
/// Each pushed edit replaces the pending one and restarts the quiet period.
/// When the period elapses without a newer edit, the pending text is
/// normalized and sent on the commit channel. Dropping or shutting down the
/// writer flushes whatever is still pending.
pub struct DebouncedModelWriter {
    edits: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl DebouncedModelWriter {
    /// Start the debounce task. Committed model values arrive on the returned
    /// receiver.
    pub fn spawn(quiet_period: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (edits, edit_rx) = mpsc::unbounded_channel();
        let (commit_tx, commits) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(quiet_period, edit_rx, commit_tx));
        (Self { edits, task }, commits)
    }

    /// Queue a display edit for a debounced model write.
    pub fn push(&self, display_text: impl Into<String>) -> Result<(), BindingError> {
        self.edits
            .send(display_text.into())
            .map_err(|_| BindingError::WriterClosed)
    }

    /// Flush the pending edit, if any, and wait for the task to finish.
    pub async fn shutdown(self) -> Result<(), BindingError> {
        drop(self.edits);
        self.task.await?;
        Ok(())
    }
}

async fn run(
    quiet_period: Duration,
    mut edits: mpsc::UnboundedReceiver<String>,
    commits: mpsc::UnboundedSender<String>,
) {
    let mut last_committed: Option<String> = None;

    while let Some(mut pending) = edits.recv().await {
        let mut deadline = Instant::now() + quiet_period;
        let mut closed = false;

        loop {
            tokio::select! {
                _ = sleep_until(deadline) => break,
                next = edits.recv() => match next {
                    Some(text) => {
                        debug!("Edit {:?} superseded by {:?}", pending, text);
                        pending = text;
                        deadline = Instant::now() + quiet_period;
                    }
                    None => {
                        closed = true;
                        break;
                    }
                },
            }
        }

        let model = normalize(&pending);
        if last_committed.as_deref() == Some(model.as_str()) {
            debug!("Model value {:?} unchanged, skipping write", model);
        } else {
            info!("Committing model value {:?}", model);
            if commits.send(model.clone()).is_err() {
                debug!("Commit receiver dropped, stopping debounce task");
                return;
            }
            last_committed = Some(model);
        }

        if closed {
            break;
        }
    }
}
