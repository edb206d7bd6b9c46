//! # relief-bench
//!
//! Benchmark suite for the Relief pipeline.
//!
//! Provides 5 procedural raster scenarios, a timed runner that also
//! checks the printability of every result, and CSV export for
//! regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
