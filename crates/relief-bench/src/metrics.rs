//! Benchmark metrics — data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Grid resolution the raster was sampled to.
    pub resolution: u32,
    /// Number of timed runs.
    pub repetitions: u32,
    /// Total wall-clock time across all runs (seconds).
    pub total_wall_time: f64,
    /// Average time per run (seconds).
    pub avg_run_time: f64,
    pub min_run_time: f64,
    pub max_run_time: f64,
    /// Vertex count of the produced mesh.
    pub vertex_count: usize,
    /// Triangle count of the produced mesh.
    pub triangle_count: usize,
    /// Every edge shared by exactly two triangles.
    pub watertight: bool,
    /// Enclosed volume (positive for outward winding).
    pub signed_volume: f64,
}

impl BenchmarkMetrics {
    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,resolution,vertex_count,triangle_count,repetitions,total_wall_time_s,avg_run_ms,min_run_ms,max_run_ms,watertight,signed_volume".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{},{:.3}",
            self.scenario,
            self.resolution,
            self.vertex_count,
            self.triangle_count,
            self.repetitions,
            self.total_wall_time,
            self.avg_run_time * 1000.0,
            self.min_run_time * 1000.0,
            self.max_run_time * 1000.0,
            self.watertight,
            self.signed_volume,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
