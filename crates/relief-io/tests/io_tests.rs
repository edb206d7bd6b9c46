//! Integration tests for relief-io.

use relief_io::{validate_settings, Projection, Settings};
use relief_mesh::NormalQuality;
use relief_types::ReliefError;

fn config_setting(err: ReliefError) -> &'static str {
    match err {
        ReliefError::Config { setting, .. } => setting,
        other => panic!("expected config error, got {other}"),
    }
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn defaults_match_documented_values() {
    let s = Settings::default();
    assert_eq!(s.resolution, 128);
    assert_eq!(s.depth, 90.0);
    assert_eq!(s.base_height, 12.0);
    assert_eq!(s.projection, Projection::Plane);
    assert_eq!(s.smoothness, 6);
    assert_eq!(s.edge_sharpness, 2.0);
    assert_eq!(s.surface_detail, 9);
    assert_eq!(s.noise_reduction, 5);
    assert_eq!(s.contrast_boost, 1.5);
    assert_eq!(s.depth_enhancement, 1.6);
    assert_eq!(s.bilateral_filter, 6);
    assert_eq!(s.laplacian_enhancement, 4);
    assert!(s.multi_scale_processing);
    assert_eq!(s.edge_preservation, 8);
    assert!(s.mesh_optimization);
    assert_eq!(s.anisotropic_diffusion, 5);
    assert_eq!(s.unsharp_masking, 4);
    assert_eq!(s.gradient_enhancement, 6);
    assert!(s.adaptive_contrast);
    assert!(!s.invert_depth);
    assert!(s.adaptive_resolution);
    assert!(s.high_quality_normals);
    assert!(s.generate_solid);
}

#[test]
fn presets_are_valid() {
    for s in [Settings::default(), Settings::draft(), Settings::high_quality(), Settings::unfiltered()] {
        assert!(validate_settings(&s).is_ok());
    }
}

#[test]
fn partial_toml_fills_defaults() {
    let s = Settings::from_toml_str(
        r#"
        resolution = 32
        projection = "cookie"
        generateSolid = false
        "#,
    )
    .unwrap();
    assert_eq!(s.resolution, 32);
    assert_eq!(s.projection, Projection::Cookie);
    assert!(!s.generate_solid);
    assert_eq!(s.depth, 90.0);
}

#[test]
fn json_uses_camel_case() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(json.contains("\"baseHeight\""));
    assert!(json.contains("\"highQualityNormals\""));
    let back = Settings::from_json_str(&json).unwrap();
    assert_eq!(back, Settings::default());
}

#[test]
fn bad_toml_is_serialization_error() {
    let err = Settings::from_toml_str("resolution = \"big\"").unwrap_err();
    assert!(matches!(err, ReliefError::Serialization(_)));
}

#[test]
fn projection_from_str() {
    assert_eq!("cylinder".parse::<Projection>().unwrap(), Projection::Cylinder);
    assert!("sphere".parse::<Projection>().is_err());
}

#[test]
fn derived_configs_carry_knobs() {
    let s = Settings {
        invert_depth: true,
        surface_detail: 7,
        ..Settings::default()
    };
    let synth = s.synthesis_config();
    assert!(synth.invert);
    assert_eq!(synth.surface_detail, 7.0);

    let enhance = s.enhance_config();
    assert_eq!(enhance.depth, 90.0);
    assert_eq!(enhance.base_height, 12.0);
    assert_eq!(enhance.bilateral_filter, 6);
    assert_eq!(s.normal_quality(), NormalQuality::High);
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn zero_resolution_fails() {
    let s = Settings {
        resolution: 0,
        ..Settings::default()
    };
    assert_eq!(config_setting(validate_settings(&s).unwrap_err()), "resolution");
}

#[test]
fn single_cell_resolution_fails() {
    let s = Settings {
        resolution: 1,
        ..Settings::default()
    };
    assert!(validate_settings(&s).is_err());
}

#[test]
fn oversized_resolution_fails() {
    let s = Settings {
        resolution: 5000,
        ..Settings::default()
    };
    assert!(validate_settings(&s).is_err());
}

#[test]
fn negative_depth_fails() {
    let s = Settings {
        depth: -1.0,
        ..Settings::default()
    };
    assert_eq!(config_setting(validate_settings(&s).unwrap_err()), "depth");
}

#[test]
fn nan_base_height_fails() {
    let s = Settings {
        base_height: f32::NAN,
        ..Settings::default()
    };
    assert_eq!(config_setting(validate_settings(&s).unwrap_err()), "baseHeight");
}

#[test]
fn float_knob_out_of_range_fails() {
    let s = Settings {
        contrast_boost: 3.0,
        ..Settings::default()
    };
    assert_eq!(config_setting(validate_settings(&s).unwrap_err()), "contrastBoost");
}

#[test]
fn int_knob_out_of_range_fails() {
    let s = Settings {
        bilateral_filter: 11,
        ..Settings::default()
    };
    assert_eq!(config_setting(validate_settings(&s).unwrap_err()), "bilateralFilter");
}

#[test]
fn surface_detail_zero_fails() {
    let s = Settings {
        surface_detail: 0,
        ..Settings::default()
    };
    assert_eq!(config_setting(validate_settings(&s).unwrap_err()), "surfaceDetail");
}
