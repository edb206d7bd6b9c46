//! Integration tests for relief-telemetry.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use relief_telemetry::sinks::{TracingSink, VecSink};
use relief_telemetry::{EventSink, Milestone, NullObserver, ProgressBus, ProgressEvent, ProgressObserver};

/// Sink that shares its collected events with the test.
struct SharedSink(Arc<Mutex<Vec<ProgressEvent>>>);

impl EventSink for SharedSink {
    fn handle(&mut self, event: &ProgressEvent) {
        self.0.lock().unwrap().push(*event);
    }

    fn name(&self) -> &str {
        "shared_sink"
    }
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn milestones_are_monotonic() {
    let percents: Vec<u8> = Milestone::ALL.iter().map(Milestone::percent).collect();
    assert!(percents.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(percents.first(), Some(&2));
    assert_eq!(percents.last(), Some(&100));
}

#[test]
fn event_from_milestone() {
    let event = ProgressEvent::from(Milestone::Closed);
    assert_eq!(event.percent, 88);
}

#[test]
fn event_serialization() {
    let event = ProgressEvent::from(Milestone::BilateralFilter);
    let json = serde_json::to_string(&event).unwrap();
    let recovered: ProgressEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

// ─── Observer Tests ───────────────────────────────────────────

#[test]
fn closure_is_an_observer() {
    let mut seen = Vec::new();
    {
        let mut observer = |e: &ProgressEvent| seen.push(e.percent);
        let dyn_observer: &mut dyn ProgressObserver = &mut observer;
        dyn_observer.on_progress(&Milestone::Sampled.into());
        dyn_observer.on_progress(&Milestone::Normals.into());
    }
    assert_eq!(seen, vec![2, 100]);
}

#[test]
fn null_observer_accepts_events() {
    let mut observer = NullObserver;
    observer.on_progress(&Milestone::Sampled.into());
}

#[test]
fn vec_sink_collects() {
    let mut sink = VecSink::new();
    sink.on_progress(&Milestone::Sampled.into());
    sink.on_progress(&Milestone::Synthesized.into());
    assert_eq!(sink.percents(), vec![2, 8]);
}

#[test]
fn tracing_sink_handles_without_subscriber() {
    let mut sink = TracingSink::default();
    sink.handle(&Milestone::Optimized.into());
    assert_eq!(sink.name(), "tracing_sink");
}

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emit_and_flush() {
    let collected = Arc::new(Mutex::new(Vec::new()));
    let mut bus = ProgressBus::new();
    bus.add_sink(Box::new(SharedSink(collected.clone())));

    let mut observer = bus.observer();
    observer.on_progress(&Milestone::Sampled.into());
    observer.on_progress(&Milestone::Synthesized.into());

    assert_eq!(bus.flush(), 2);
    assert_eq!(collected.lock().unwrap().len(), 2);
}

#[test]
fn observer_works_across_threads() {
    let collected = Arc::new(Mutex::new(Vec::new()));
    let mut bus = ProgressBus::new();
    bus.add_sink(Box::new(SharedSink(collected.clone())));

    let mut observer = bus.observer();
    std::thread::spawn(move || {
        for m in Milestone::ALL {
            observer.on_progress(&m.into());
        }
    })
    .join()
    .unwrap();

    bus.finalize();
    assert_eq!(collected.lock().unwrap().len(), Milestone::ALL.len());
}

#[test]
fn disabled_bus_drops_events() {
    let collected = Arc::new(Mutex::new(Vec::new()));
    let mut bus = ProgressBus::new();
    bus.add_sink(Box::new(SharedSink(collected.clone())));
    bus.set_enabled(false);

    bus.observer().on_progress(&Milestone::Sampled.into());
    assert_eq!(bus.flush(), 1);
    assert!(collected.lock().unwrap().is_empty());
}

#[test]
fn multiple_sinks() {
    let mut bus = ProgressBus::new();
    bus.add_sink(Box::new(VecSink::new()));
    bus.add_sink(Box::new(TracingSink::default()));
    assert_eq!(bus.sink_count(), 2);
}

#[test]
fn flush_wait_times_out_when_idle() {
    let mut bus = ProgressBus::new();
    assert_eq!(bus.flush_wait(Duration::from_millis(5)), 0);
}

#[test]
fn flush_wait_blocks_for_a_worker() {
    let collected = Arc::new(Mutex::new(Vec::new()));
    let mut bus = ProgressBus::new();
    bus.add_sink(Box::new(SharedSink(collected.clone())));

    let mut observer = bus.observer();
    let worker = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(20));
        observer.on_progress(&Milestone::Sampled.into());
    });

    let mut seen = 0;
    while seen == 0 {
        seen += bus.flush_wait(Duration::from_secs(5));
    }
    worker.join().unwrap();
    assert_eq!(seen, 1);
    assert_eq!(collected.lock().unwrap()[0].percent, 2);
}
