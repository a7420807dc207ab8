use std::time::Duration;

use shared::{MaskEffect, MaskEvent, MaskOptions};
use tokio::sync::mpsc;
use tracing::debug;

use super::{BindingError, DebouncedModelWriter, InputBinding};

/// An input binding wired to its debounced model writer.
///
/// `ScheduleModelWrite` effects are consumed here and forwarded to the
/// writer; everything else is returned for the UI to apply.
pub struct MaskSession {
    binding: InputBinding,
    writer: DebouncedModelWriter,
}

impl MaskSession {
    /// Start a session. Committed model values arrive on the returned
    /// receiver.
    pub fn start(options: MaskOptions) -> (Self, mpsc::UnboundedReceiver<String>) {
        let quiet_period = Duration::from_millis(options.debounce_ms);
        let (writer, commits) = DebouncedModelWriter::spawn(quiet_period);
        let session = Self {
            binding: InputBinding::new(options),
            writer,
        };
        (session, commits)
    }

    pub fn binding(&self) -> &InputBinding {
        &self.binding
    }

    pub fn dispatch(&mut self, event: MaskEvent) -> Result<Vec<MaskEffect>, BindingError> {
        let mut effects = Vec::new();
        for effect in self.binding.handle(event) {
            match effect {
                MaskEffect::ScheduleModelWrite { text } => {
                    debug!("Scheduling model write for {:?}", text);
                    self.writer.push(text)?;
                }
                other => effects.push(other),
            }
        }
        Ok(effects)
    }

    /// Flush any pending model write and stop the debounce task.
    pub async fn close(self) -> Result<(), BindingError> {
        self.writer.shutdown().await
    }
}
