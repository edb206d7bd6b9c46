//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use serde::{Deserialize, Serialize};
use relief_math::Vec3;
use relief_types::constants::NORMAL_EPSILON;

use crate::mesh::MeshBuffers;

/// Requested normal fidelity.
///
/// Both tiers currently run the same area-weighted accumulation; the
/// distinction is kept so settings files stay stable if they diverge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalQuality {
    Standard,
    #[default]
    High,
}

impl NormalQuality {
    /// Maps the `highQualityNormals` toggle to a tier.
    pub fn from_high_quality(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Standard
        }
    }
}

/// Compute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated
/// at each vertex, then normalized. Vertices with no adjacent area keep
/// a zero normal.
///
/// Returns a flat buffer with the same layout as `mesh.vertices`.
pub fn compute_vertex_normals(mesh: &MeshBuffers, quality: NormalQuality) -> Vec<f32> {
    match quality {
        NormalQuality::Standard | NormalQuality::High => area_weighted_normals(mesh),
    }
}

fn area_weighted_normals(mesh: &MeshBuffers) -> Vec<f32> {
    let n = mesh.vertex_count();
    let mut acc = vec![Vec3::ZERO; n];

    // Cross product magnitude = 2 × triangle area
    for t in 0..mesh.triangle_count() {
        let face = mesh.face_normal(t);
        for v in mesh.triangle(t) {
            acc[v as usize] += face;
        }
    }

    let mut normals = Vec::with_capacity(n * 3);
    for v in acc {
        let len = v.length();
        let unit = if len > NORMAL_EPSILON && len.is_finite() {
            v / len
        } else {
            Vec3::ZERO
        };
        normals.extend_from_slice(&[unit.x, unit.y, unit.z]);
    }
    normals
}

/// Computes normals and stores them on the mesh.
pub fn attach_vertex_normals(mesh: &mut MeshBuffers, quality: NormalQuality) {
    mesh.normals = Some(compute_vertex_normals(mesh, quality));
}
