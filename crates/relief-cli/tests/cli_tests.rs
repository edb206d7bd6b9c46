//! Integration tests for the relief CLI commands.

use std::path::PathBuf;

use relief_cli::commands;
use relief_mesh::MeshBuffers;
use relief_types::ReliefError;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("relief_cli_{}_{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

// ─── Validate ─────────────────────────────────────────────────

#[test]
fn valid_settings_pass() {
    let path = temp_file("valid.toml", "resolution = 32\nprojection = \"cookie\"\n");
    assert!(commands::validate(path.to_str().unwrap()).is_ok());
    std::fs::remove_file(path).ok();
}

#[test]
fn out_of_range_settings_fail() {
    let path = temp_file("range.toml", "resolution = 1\n");
    let err = commands::validate(path.to_str().unwrap()).unwrap_err();
    let relief = err.downcast_ref::<ReliefError>().unwrap();
    assert!(matches!(relief, ReliefError::Config { setting: "resolution", .. }));
    std::fs::remove_file(path).ok();
}

#[test]
fn malformed_mesh_fails() {
    let path = temp_file(
        "bad_mesh.json",
        r#"{"vertices":[0.0,0.0,0.0],"indices":[0,1,2],"normals":null}"#,
    );
    let err = commands::validate(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReliefError>(),
        Some(ReliefError::InvalidMesh(_))
    ));
    std::fs::remove_file(path).ok();
}

#[test]
fn unknown_extension_fails() {
    let path = temp_file("mesh.stl", "solid");
    assert!(commands::validate(path.to_str().unwrap()).is_err());
    std::fs::remove_file(path).ok();
}

// ─── Generate ─────────────────────────────────────────────────

#[test]
fn generate_writes_a_valid_mesh() {
    let path = std::env::temp_dir().join(format!("relief_cli_{}_out.json", std::process::id()));
    commands::generate("gradient", None, Some(8), path.to_str(), true).unwrap();

    let mesh: MeshBuffers =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.vertex_count(), 2 * 8 * 8);
    std::fs::remove_file(path).ok();
}

#[test]
fn generate_rejects_unknown_scenario() {
    assert!(commands::generate("sphere_drape", None, Some(8), None, false).is_err());
}
