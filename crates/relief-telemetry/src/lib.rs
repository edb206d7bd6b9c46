//! # relief-telemetry
//!
//! Progress reporting for the Relief pipeline. The pipeline emits a
//! [`ProgressEvent`] at each fixed milestone through a
//! [`ProgressObserver`]; callers that run the pipeline on a worker thread
//! route events through a [`ProgressBus`] to pluggable sinks.

pub mod bus;
pub mod events;
pub mod observer;
pub mod sinks;

pub use bus::{ChannelObserver, ProgressBus};
pub use events::{Milestone, ProgressEvent};
pub use observer::{NullObserver, ProgressObserver};
pub use sinks::EventSink;
