//! The pipeline-facing progress interface.

use crate::events::ProgressEvent;

/// Receives progress synchronously on the thread running the pipeline.
///
/// Closures `FnMut(&ProgressEvent)` implement this directly.
pub trait ProgressObserver {
    fn on_progress(&mut self, event: &ProgressEvent);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ProgressEvent),
{
    fn on_progress(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_progress(&mut self, _event: &ProgressEvent) {}
}
