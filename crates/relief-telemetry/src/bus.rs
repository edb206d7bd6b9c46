//! Progress bus — hands events from a worker thread to sinks.
//!
//! The pipeline is synchronous and must run off the interactive thread.
//! The worker gets a [`ChannelObserver`] (cheap to clone, `Send`); the
//! interactive thread owns the bus and calls [`ProgressBus::flush`]
//! whenever it wants to update its sinks.

use std::sync::mpsc;
use std::time::Duration;

use crate::events::ProgressEvent;
use crate::observer::ProgressObserver;
use crate::sinks::EventSink;

/// Broadcast bus for progress events.
pub struct ProgressBus {
    /// Template sender, cloned into each observer.
    sender: mpsc::Sender<ProgressEvent>,
    /// Receiver drained by `flush`.
    receiver: mpsc::Receiver<ProgressEvent>,
    /// Registered sinks.
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus drops events on flush.
    enabled: bool,
}

impl ProgressBus {
    /// Creates a new bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables delivery to sinks.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is delivering events.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Creates an observer that feeds this bus from any thread.
    pub fn observer(&self) -> ChannelObserver {
        ChannelObserver {
            sender: self.sender.clone(),
        }
    }

    /// Delivers all pending events to the sinks.
    ///
    /// Returns the number of events drained.
    pub fn flush(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.deliver(&event);
            drained += 1;
        }
        drained
    }

    /// Blocks up to `timeout` for the next event, then drains the rest.
    ///
    /// Returns 0 if nothing arrived in time.
    pub fn flush_wait(&mut self, timeout: Duration) -> usize {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.deliver(&event);
                1 + self.flush()
            }
            Err(_) => 0,
        }
    }

    fn deliver(&mut self, event: &ProgressEvent) {
        if !self.enabled {
            return;
        }
        for sink in &mut self.sinks {
            sink.handle(event);
        }
    }

    /// Flushes, then finalizes every sink.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for ProgressBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`ProgressBus`].
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: mpsc::Sender<ProgressEvent>,
}

impl ProgressObserver for ChannelObserver {
    fn on_progress(&mut self, event: &ProgressEvent) {
        // The bus may already be gone if the caller discarded the run
        let _ = self.sender.send(*event);
    }
}
