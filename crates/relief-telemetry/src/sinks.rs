//! Pluggable event sinks.
//!
//! Sinks consume events drained from a [`crate::ProgressBus`]. The
//! built-in sinks can also be handed to the pipeline directly as
//! observers.

use crate::events::ProgressEvent;
use crate::observer::ProgressObserver;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &ProgressEvent);

    /// Called when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in a `Vec` for testing and inspection.
#[derive(Debug, Default)]
pub struct VecSink {
    /// Collected events.
    pub events: Vec<ProgressEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Collected percentages, in arrival order.
    pub fn percents(&self) -> Vec<u8> {
        self.events.iter().map(|e| e.percent).collect()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &ProgressEvent) {
        self.events.push(*event);
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

impl ProgressObserver for VecSink {
    fn on_progress(&mut self, event: &ProgressEvent) {
        self.handle(event);
    }
}

/// Logs events through `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    ///
    /// Levels other than `DEBUG` and `TRACE` log at `INFO`.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(tracing::Level::INFO)
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &ProgressEvent) {
        match self.level {
            tracing::Level::TRACE => tracing::trace!(
                percent = event.percent,
                milestone = ?event.milestone,
                "mesh_progress"
            ),
            tracing::Level::DEBUG => tracing::debug!(
                percent = event.percent,
                milestone = ?event.milestone,
                "mesh_progress"
            ),
            _ => tracing::info!(
                percent = event.percent,
                milestone = ?event.milestone,
                "mesh_progress"
            ),
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

impl ProgressObserver for TracingSink {
    fn on_progress(&mut self, event: &ProgressEvent) {
        self.handle(event);
    }
}
