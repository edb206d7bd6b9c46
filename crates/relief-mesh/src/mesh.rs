//! Core output mesh type with flat interleaved layout.
//!
//! Positions are stored `[x0, y0, z0, x1, y1, z1, ...]` and triangles as
//! `[t0v0, t0v1, t0v2, t1v0, ...]`, matching what GPU vertex buffers and
//! STL writers consume directly.

use serde::{Deserialize, Serialize};
use relief_math::Vec3;
use relief_types::{ReliefError, ReliefResult};

/// Triangle mesh produced by the pipeline.
///
/// Ownership transfers to the caller on return; nothing in the pipeline
/// keeps a reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// Vertex positions, three floats per vertex.
    pub vertices: Vec<f32>,
    /// Triangle vertex indices, three per triangle.
    pub indices: Vec<u32>,
    /// Unit vertex normals, same cardinality as `vertices`.
    pub normals: Option<Vec<f32>>,
}

impl MeshBuffers {
    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity * 3),
            indices: Vec::with_capacity(triangle_capacity * 3),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        let base = i * 3;
        [self.vertices[base], self.vertices[base + 1], self.vertices[base + 2]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.position(i))
    }

    /// Returns the normal of vertex `i`, if normals have been computed.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> Option<Vec3> {
        self.normals
            .as_ref()
            .map(|n| Vec3::new(n[i * 3], n[i * 3 + 1], n[i * 3 + 2]))
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Appends a vertex and returns its index.
    #[inline]
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&[p.x, p.y, p.z]);
        index
    }

    /// Appends a triangle.
    #[inline]
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Unnormalized face normal of triangle `t`; its length is twice the area.
    #[inline]
    pub fn face_normal(&self, t: usize) -> Vec3 {
        let [a, b, c] = self.triangle(t);
        let pa = self.position_vec3(a as usize);
        let pb = self.position_vec3(b as usize);
        let pc = self.position_vec3(c as usize);
        (pb - pa).cross(pc - pa)
    }

    /// Marks which vertices are referenced by at least one triangle.
    pub fn referenced_vertices(&self) -> Vec<bool> {
        let mut used = vec![false; self.vertex_count()];
        for &idx in &self.indices {
            if let Some(slot) = used.get_mut(idx as usize) {
                *slot = true;
            }
        }
        used
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Position and normal buffers hold whole `xyz` triples
    /// - Normal buffer (if present) matches the vertex count
    /// - Triangle indices are within bounds
    /// - All coordinates are finite
    pub fn validate(&self) -> ReliefResult<()> {
        if self.vertices.len() % 3 != 0 {
            return Err(ReliefError::InvalidMesh(
                "Vertex buffer length is not divisible by 3".into(),
            ));
        }
        if let Some(normals) = &self.normals {
            if normals.len() != self.vertices.len() {
                return Err(ReliefError::InvalidMesh(format!(
                    "Normal buffer length ({}) != vertex buffer length ({})",
                    normals.len(),
                    self.vertices.len()
                )));
            }
        }
        if self.indices.len() % 3 != 0 {
            return Err(ReliefError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        let n = self.vertex_count();
        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(ReliefError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        if let Some(i) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(ReliefError::InvalidMesh(format!(
                "Non-finite coordinate at vertex {}",
                i / 3
            )));
        }

        Ok(())
    }
}
