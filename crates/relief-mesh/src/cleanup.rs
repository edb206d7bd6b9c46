//! Topology cleanup.
//!
//! Flat regions and coincident vertices (e.g. a zero-thickness base wall)
//! produce slivers with no area. Those are dropped from the index buffer;
//! the vertex buffer is left untouched, so some vertices may end up
//! unreferenced.

use relief_types::constants::DEGENERATE_AREA_THRESHOLD;
use tracing::debug;

use crate::mesh::MeshBuffers;

/// Removes every triangle whose doubled area is not above `threshold`.
///
/// Returns the number of triangles removed.
pub fn remove_degenerate_triangles_with(mesh: &mut MeshBuffers, threshold: f32) -> usize {
    let before = mesh.triangle_count();
    let mut kept: Vec<u32> = Vec::with_capacity(mesh.indices.len());

    for t in 0..before {
        if mesh.face_normal(t).length() > threshold {
            kept.extend_from_slice(&mesh.triangle(t));
        }
    }

    mesh.indices = kept;
    let removed = before - mesh.triangle_count();
    debug!(before, removed, "Removed degenerate triangles");
    removed
}

/// Removes degenerate triangles using the default area threshold.
pub fn remove_degenerate_triangles(mesh: &mut MeshBuffers) -> usize {
    remove_degenerate_triangles_with(mesh, DEGENERATE_AREA_THRESHOLD)
}
