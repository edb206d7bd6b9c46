//! Benchmark runner — executes scenarios through the pipeline and collects metrics.

use std::time::Instant;

use tracing::info;

use relief_mesh::{MeshBuffers, MeshReport};
use relief_sculpt::generate_mesh;
use relief_telemetry::NullObserver;
use relief_types::ReliefResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::Scenario;

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario `repetitions` times (at least once).
    ///
    /// Returns metrics plus the mesh from the last run.
    pub fn run_with_mesh(scenario: &Scenario) -> ReliefResult<(BenchmarkMetrics, MeshBuffers)> {
        let runs = scenario.repetitions.max(1);
        let mut run_times: Vec<f64> = Vec::with_capacity(runs as usize);
        let mut mesh = MeshBuffers::default();

        let total_start = Instant::now();
        for _ in 0..runs {
            let start = Instant::now();
            mesh = generate_mesh(&scenario.raster, &scenario.settings, &mut NullObserver)?;
            run_times.push(start.elapsed().as_secs_f64());
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let report = MeshReport::from_mesh(&mesh);
        let avg = run_times.iter().sum::<f64>() / run_times.len() as f64;
        let min = run_times.iter().copied().fold(f64::MAX, f64::min);
        let max = run_times.iter().copied().fold(0.0, f64::max);

        info!(
            scenario = scenario.kind.name(),
            runs,
            avg_ms = avg * 1000.0,
            watertight = report.is_watertight,
            "Benchmark scenario finished"
        );

        let metrics = BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            resolution: scenario.settings.resolution,
            repetitions: runs,
            total_wall_time,
            avg_run_time: avg,
            min_run_time: min,
            max_run_time: max,
            vertex_count: report.vertex_count,
            triangle_count: report.triangle_count,
            watertight: report.is_watertight,
            signed_volume: report.signed_volume,
        };
        Ok((metrics, mesh))
    }

    /// Run a single scenario.
    pub fn run(scenario: &Scenario) -> ReliefResult<BenchmarkMetrics> {
        Self::run_with_mesh(scenario).map(|(metrics, _)| metrics)
    }
}
