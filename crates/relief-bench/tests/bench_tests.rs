//! Integration tests for relief-bench.

use relief_bench::metrics::BenchmarkMetrics;
use relief_bench::runner::BenchmarkRunner;
use relief_bench::scenarios::{Scenario, ScenarioKind, SOURCE_SIZE};
use relief_io::Settings;
use relief_types::ReliefError;

fn quick(kind: ScenarioKind) -> Scenario {
    let mut scenario = Scenario::from_kind(kind).unwrap().with_settings(Settings {
        resolution: 16,
        mesh_optimization: false,
        ..Settings::draft()
    });
    scenario.repetitions = 1;
    scenario
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn all_scenarios() {
    assert_eq!(ScenarioKind::all().len(), 5);
    for &kind in ScenarioKind::all() {
        let s = Scenario::from_kind(kind).unwrap();
        assert_eq!(s.kind, kind);
        assert_eq!(s.raster.width(), SOURCE_SIZE);
        assert_eq!(s.raster.height(), SOURCE_SIZE);
    }
}

#[test]
fn scenario_names_parse_back() {
    for &kind in ScenarioKind::all() {
        assert_eq!(kind.name().parse::<ScenarioKind>().unwrap(), kind);
    }
    let err = "sphere_drape".parse::<ScenarioKind>().unwrap_err();
    assert!(matches!(err, ReliefError::Config { setting: "scenario", .. }));
}

#[test]
fn dome_is_brightest_in_the_middle() {
    let s = Scenario::radial_dome().unwrap();
    let mid = SOURCE_SIZE / 2;
    assert!(s.raster.pixel(mid, mid)[0] > 250);
    assert_eq!(s.raster.pixel(0, 0)[0], 0);
}

#[test]
fn centre_spot_is_mostly_black() {
    let s = Scenario::centre_spot().unwrap();
    assert_eq!(s.raster.pixel(0, 0), [0, 0, 0, 255]);
    assert_eq!(s.raster.pixel(SOURCE_SIZE / 2, SOURCE_SIZE / 2), [255, 255, 255, 255]);
}

#[test]
fn default_settings_are_draft() {
    let s = Scenario::gradient().unwrap();
    assert_eq!(s.settings, Settings::draft());
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_gradient() {
    let metrics = BenchmarkRunner::run(&quick(ScenarioKind::Gradient)).unwrap();
    assert_eq!(metrics.scenario, "gradient");
    assert_eq!(metrics.resolution, 16);
    assert_eq!(metrics.repetitions, 1);
    assert_eq!(metrics.vertex_count, 2 * 16 * 16);
    assert_eq!(metrics.triangle_count, 4 * 15 * 15 + 8 * 15);
    assert!(metrics.total_wall_time >= 0.0);
    assert!(metrics.watertight);
    assert!(metrics.signed_volume > 0.0);
}

#[test]
fn every_scenario_is_watertight() {
    for &kind in ScenarioKind::all() {
        let (metrics, mesh) = BenchmarkRunner::run_with_mesh(&quick(kind)).unwrap();
        assert_eq!(metrics.scenario, kind.name());
        assert!(metrics.watertight, "{} leaks", kind.name());
        assert_eq!(mesh.triangle_count(), metrics.triangle_count);
    }
}

#[test]
fn zero_repetitions_still_runs_once() {
    let mut scenario = quick(ScenarioKind::FlatGray);
    scenario.repetitions = 0;
    let metrics = BenchmarkRunner::run(&scenario).unwrap();
    assert_eq!(metrics.repetitions, 1);
    assert!(metrics.min_run_time <= metrics.max_run_time);
}

#[test]
fn invalid_settings_fail_the_run() {
    let scenario = quick(ScenarioKind::Checkerboard).with_settings(Settings {
        resolution: 4096,
        ..Settings::draft()
    });
    assert!(BenchmarkRunner::run(&scenario).is_err());
}

// ─── Metrics Tests ────────────────────────────────────────────

fn sample_metrics() -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: "test".into(),
        resolution: 64,
        repetitions: 3,
        total_wall_time: 1.5,
        avg_run_time: 0.5,
        min_run_time: 0.4,
        max_run_time: 0.6,
        vertex_count: 8192,
        triangle_count: 16380,
        watertight: true,
        signed_volume: 12.5,
    }
}

#[test]
fn metrics_csv_output() {
    let csv = BenchmarkMetrics::to_csv(&[sample_metrics()]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("scenario,resolution"));
    assert_eq!(
        lines[1],
        "test,64,8192,16380,3,1.500000,500.0000,400.0000,600.0000,true,12.500"
    );
    assert_eq!(lines[0].split(',').count(), lines[1].split(',').count());
}

#[test]
fn metrics_json_roundtrip() {
    let json = serde_json::to_string(&sample_metrics()).unwrap();
    let back: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back.triangle_count, 16380);
    assert!(back.watertight);
}
