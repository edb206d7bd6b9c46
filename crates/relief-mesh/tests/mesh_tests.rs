//! Integration tests for relief-mesh.

use relief_mesh::cleanup::{remove_degenerate_triangles, remove_degenerate_triangles_with};
use relief_mesh::normals::{attach_vertex_normals, compute_vertex_normals, NormalQuality};
use relief_mesh::topology::{signed_volume, MeshReport, Topology};
use relief_mesh::MeshBuffers;

// ─── Fixtures ─────────────────────────────────────────────────

fn make_single_triangle() -> MeshBuffers {
    MeshBuffers {
        vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        indices: vec![0, 1, 2],
        normals: None,
    }
}

/// Unit square in the XZ plane, wound to face +Y.
fn make_quad() -> MeshBuffers {
    MeshBuffers {
        vertices: vec![
            0.0, 0.0, 0.0, // tl
            1.0, 0.0, 0.0, // tr
            0.0, 0.0, 1.0, // bl
            1.0, 0.0, 1.0, // br
        ],
        indices: vec![0, 2, 1, 1, 2, 3],
        normals: None,
    }
}

/// Corner tetrahedron with outward winding.
fn make_tetrahedron() -> MeshBuffers {
    MeshBuffers {
        vertices: vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
        ],
        indices: vec![0, 2, 1, 0, 1, 3, 0, 3, 2, 1, 2, 3],
        normals: None,
    }
}

// ─── MeshBuffers Tests ────────────────────────────────────────

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
}

#[test]
fn push_vertex_returns_index() {
    let mut mesh = MeshBuffers::with_capacity(2, 0);
    let a = mesh.push_vertex(relief_math::Vec3::new(1.0, 2.0, 3.0));
    let b = mesh.push_vertex(relief_math::Vec3::ZERO);
    assert_eq!((a, b), (0, 1));
    assert_eq!(mesh.vertices, vec![1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
}

#[test]
fn face_normal_is_twice_area() {
    let mesh = make_single_triangle();
    let n = mesh.face_normal(0);
    assert!((n.length() - 1.0).abs() < 1e-6);
    assert!(n.z > 0.0);
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_catches_ragged_vertices() {
    let mut mesh = make_single_triangle();
    mesh.vertices.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_normal_length_mismatch() {
    let mut mesh = make_single_triangle();
    mesh.normals = Some(vec![0.0; 6]);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_nan() {
    let mut mesh = make_single_triangle();
    mesh.vertices[4] = f32::NAN;
    assert!(mesh.validate().is_err());
}

#[test]
fn serde_roundtrip_preserves_buffers() {
    let mesh = make_quad();
    let json = serde_json::to_string(&mesh).unwrap();
    let back: MeshBuffers = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mesh);
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn topology_single_quad() {
    let topo = Topology::build(&make_quad());
    assert_eq!(topo.edge_count(), 5);
    assert_eq!(topo.boundary_edge_count(), 4);
    assert!(!topo.is_closed());
    assert!(topo.is_consistently_oriented());
}

#[test]
fn tetrahedron_is_closed_and_oriented() {
    let mesh = make_tetrahedron();
    let topo = Topology::build(&mesh);
    assert_eq!(topo.edge_count(), 6);
    assert!(topo.is_closed());
    assert!(topo.is_consistently_oriented());
    assert!((signed_volume(&mesh) - 1.0 / 6.0).abs() < 1e-9);
}

#[test]
fn flipped_face_is_detected() {
    let mut mesh = make_tetrahedron();
    mesh.indices.swap(9, 10);
    let topo = Topology::build(&mesh);
    assert!(topo.is_closed());
    assert_eq!(topo.inconsistent_edge_count(), 3);
}

#[test]
fn duplicate_face_is_non_manifold() {
    let mut mesh = make_tetrahedron();
    mesh.indices.extend_from_slice(&[1, 2, 3]);
    let topo = Topology::build(&mesh);
    assert_eq!(topo.non_manifold_edge_count(), 3);
    assert!(!topo.is_closed());
}

#[test]
fn report_for_tetrahedron() {
    let report = MeshReport::from_mesh(&make_tetrahedron());
    assert_eq!(report.triangle_count, 4);
    assert_eq!(report.unreferenced_vertex_count, 0);
    assert!(report.is_watertight);
    assert!(report.is_printable());
    assert!(format!("{report}").contains("Watertight:    yes"));
}

#[test]
fn report_for_inside_out_solid() {
    let mut mesh = make_tetrahedron();
    for t in 0..mesh.triangle_count() {
        mesh.indices.swap(t * 3 + 1, t * 3 + 2);
    }
    let report = MeshReport::from_mesh(&mesh);
    assert!(report.is_watertight);
    assert_eq!(report.inconsistent_edge_count, 0);
    assert!(report.signed_volume < 0.0);
    assert!(!report.is_printable());
}

// ─── Cleanup Tests ────────────────────────────────────────────

#[test]
fn cleanup_drops_collinear_triangle() {
    let mut mesh = make_quad();
    // Collinear sliver along the top edge
    mesh.vertices.extend_from_slice(&[0.5, 0.0, 0.0]);
    mesh.indices.extend_from_slice(&[0, 4, 1]);
    let removed = remove_degenerate_triangles(&mut mesh);
    assert_eq!(removed, 1);
    assert_eq!(mesh.triangle_count(), 2);
    // Vertex buffer untouched
    assert_eq!(mesh.vertex_count(), 5);
}

#[test]
fn cleanup_keeps_regular_triangles() {
    let mut mesh = make_tetrahedron();
    assert_eq!(remove_degenerate_triangles(&mut mesh), 0);
    assert_eq!(mesh.triangle_count(), 4);
}

#[test]
fn cleanup_threshold_is_strict() {
    // Doubled area of this triangle is exactly 1.0
    let mut mesh = make_single_triangle();
    assert_eq!(remove_degenerate_triangles_with(&mut mesh, 1.0), 1);
}

#[test]
fn cleanup_leaves_unreferenced_vertices() {
    let mut mesh = make_quad();
    mesh.vertices.extend_from_slice(&[2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
    mesh.indices.extend_from_slice(&[1, 4, 5]);
    remove_degenerate_triangles(&mut mesh);
    let used = mesh.referenced_vertices();
    assert_eq!(used, vec![true, true, true, true, false, false]);
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_quad_normals_point_up() {
    let mesh = make_quad();
    let normals = compute_vertex_normals(&mesh, NormalQuality::High);
    for v in normals.chunks(3) {
        assert!(v[0].abs() < 1e-6);
        assert!((v[1] - 1.0).abs() < 1e-6);
        assert!(v[2].abs() < 1e-6);
    }
}

#[test]
fn normals_are_unit_length() {
    let mesh = make_tetrahedron();
    let normals = compute_vertex_normals(&mesh, NormalQuality::High);
    for (i, v) in normals.chunks(3).enumerate() {
        let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-5, "Normal at {} has length {}", i, len);
    }
}

#[test]
fn tetrahedron_normals_point_outward() {
    let mesh = make_tetrahedron();
    let normals = compute_vertex_normals(&mesh, NormalQuality::High);
    // Corner at origin: normal points into the negative octant
    assert!(normals[0] < 0.0 && normals[1] < 0.0 && normals[2] < 0.0);
}

#[test]
fn unreferenced_vertex_gets_zero_normal() {
    let mut mesh = make_quad();
    mesh.vertices.extend_from_slice(&[5.0, 5.0, 5.0]);
    attach_vertex_normals(&mut mesh, NormalQuality::High);
    let n = mesh.normal_vec3(4).unwrap();
    assert_eq!(n, relief_math::Vec3::ZERO);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quality_tiers_agree() {
    let mesh = make_tetrahedron();
    let high = compute_vertex_normals(&mesh, NormalQuality::High);
    let standard = compute_vertex_normals(&mesh, NormalQuality::Standard);
    assert_eq!(high, standard);
}

#[test]
fn quality_from_toggle() {
    assert_eq!(NormalQuality::from_high_quality(true), NormalQuality::High);
    assert_eq!(NormalQuality::from_high_quality(false), NormalQuality::Standard);
}
