//! CLI command implementations.

use std::time::{Duration, Instant};

use relief_bench::metrics::BenchmarkMetrics;
use relief_bench::runner::BenchmarkRunner;
use relief_bench::scenarios::{Scenario, ScenarioKind};
use relief_io::Settings;
use relief_mesh::{MeshBuffers, MeshReport};
use relief_sculpt::spawn_generate;
use relief_telemetry::{EventSink, ProgressBus, ProgressEvent};

fn load_settings(
    config_path: Option<&str>,
    resolution: Option<u32>,
) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match config_path {
        Some(path) => Settings::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => Settings::default(),
    };
    if let Some(r) = resolution {
        settings.resolution = r;
    }
    settings.validate()?;
    Ok(settings)
}

/// Generate a mesh from a procedural scenario image.
pub fn generate(
    scenario_name: &str,
    config_path: Option<&str>,
    resolution: Option<u32>,
    output_path: Option<&str>,
    show_progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Relief Generate");
    println!("───────────────");
    println!();

    let kind: ScenarioKind = scenario_name.parse()?;
    let settings = load_settings(config_path, resolution)?;
    let scenario = Scenario::from_kind(kind)?;

    println!("Scenario:    {}", kind.name());
    println!("Resolution:  {}", settings.resolution);
    println!("Projection:  {}", settings.projection.name());
    println!("Solid:       {}", settings.generate_solid);
    println!();

    let start = Instant::now();
    let mut bus = ProgressBus::new();
    if show_progress {
        bus.add_sink(Box::new(ConsoleSink));
    }
    let handle = spawn_generate(scenario.raster, settings, bus.observer())?;

    let mut seen = 0usize;
    while !handle.is_finished() {
        seen += bus.flush_wait(Duration::from_millis(100));
    }
    let mesh = handle.join().map_err(|_| "generation thread panicked")??;
    seen += bus.flush();
    bus.finalize();
    let elapsed = start.elapsed().as_secs_f64();

    println!();
    println!("Generated in {elapsed:.3}s ({seen} progress events)");
    println!();
    println!("{}", MeshReport::from_mesh(&mesh));

    if let Some(path) = output_path {
        std::fs::write(path, serde_json::to_string(&mesh)?)?;
        println!("Mesh written to: {path}");
    }

    Ok(())
}

/// Prints each milestone on its own line.
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn handle(&mut self, event: &ProgressEvent) {
        println!("  [{:>3}%] {:?}", event.percent, event.milestone);
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    resolution: Option<u32>,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Relief Benchmark Suite");
    println!("══════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        vec![scenario_name.parse()?]
    };

    let mut all_metrics = Vec::new();
    for kind in kinds {
        let mut scenario = Scenario::from_kind(kind)?;
        if let Some(r) = resolution {
            scenario.settings.resolution = r;
        }

        println!(
            "Running: {} ({}×{} grid, {} runs)",
            kind.name(),
            scenario.settings.resolution,
            scenario.settings.resolution,
            scenario.repetitions,
        );

        let metrics = BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Avg run:       {:.3}ms", metrics.avg_run_time * 1000.0);
        println!("  Triangles:     {}", metrics.triangle_count);
        println!("  Watertight:    {}", if metrics.watertight { "yes" } else { "no" });
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        std::fs::write(path, BenchmarkMetrics::to_csv(&all_metrics))?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a settings file or a mesh.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Relief Validator");
    println!("────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating settings: {path}");
        let settings = Settings::from_toml_str(&std::fs::read_to_string(path)?)?;
        if let Err(e) = settings.validate() {
            println!("❌ {e}");
            return Err(e.into());
        }
        println!("✅ Settings are valid.");
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let mesh: MeshBuffers = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        if let Err(e) = mesh.validate() {
            println!("❌ Mesh validation failed: {e}");
            return Err(e.into());
        }
        println!("✅ Mesh buffers are valid.");
        println!();
        println!("{}", MeshReport::from_mesh(&mesh));
    } else {
        return Err(format!(
            "Unsupported file format: {path}. Use .toml (settings) or .json (mesh)."
        )
        .into());
    }

    Ok(())
}
