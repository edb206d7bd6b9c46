//! Mesh topology queries.
//!
//! Builds edge adjacency from the triangle index buffer so the pipeline
//! and its tests can check the closed-volume invariants: every edge
//! shared by exactly two triangles, traversed in opposite directions.

use std::collections::HashMap;

use crate::mesh::MeshBuffers;

/// One triangle's use of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeUse {
    /// Index of the triangle.
    pub triangle: u32,
    /// True when the triangle walks the edge from `v_min` to `v_max`.
    pub forward: bool,
}

/// Precomputed edge adjacency for a triangle mesh.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges as `[v_min, v_max]` pairs.
    pub edges: Vec<[u32; 2]>,

    /// For each edge, the triangles that use it and in which direction.
    pub edge_uses: Vec<Vec<EdgeUse>>,
}

impl Topology {
    /// Build topology from mesh buffers.
    pub fn build(mesh: &MeshBuffers) -> Self {
        let tri_count = mesh.triangle_count();

        // Key: (min_vertex, max_vertex) to canonicalize edge direction
        let mut edge_map: HashMap<(u32, u32), Vec<EdgeUse>> = HashMap::new();

        for t in 0..tri_count {
            let [a, b, c] = mesh.triangle(t);
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let forward = v0 < v1;
                let key = if forward { (v0, v1) } else { (v1, v0) };
                edge_map.entry(key).or_default().push(EdgeUse {
                    triangle: t as u32,
                    forward,
                });
            }
        }

        let mut edges: Vec<[u32; 2]> = Vec::with_capacity(edge_map.len());
        let mut edge_uses: Vec<Vec<EdgeUse>> = Vec::with_capacity(edge_map.len());
        for ((v0, v1), uses) in edge_map {
            edges.push([v0, v1]);
            edge_uses.push(uses);
        }

        Self { edges, edge_uses }
    }

    /// Returns the number of unique undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_uses.iter().filter(|uses| uses.len() == 1).count()
    }

    /// Returns the number of edges shared by more than two triangles.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_uses.iter().filter(|uses| uses.len() > 2).count()
    }

    /// Returns true if every edge is shared by exactly two triangles.
    pub fn is_closed(&self) -> bool {
        self.edge_uses.iter().all(|uses| uses.len() == 2)
    }

    /// Number of two-triangle edges whose triangles walk it the same way.
    pub fn inconsistent_edge_count(&self) -> usize {
        self.edge_uses
            .iter()
            .filter(|uses| uses.len() == 2 && uses[0].forward == uses[1].forward)
            .count()
    }

    /// Returns true if all shared edges are traversed in opposite directions.
    pub fn is_consistently_oriented(&self) -> bool {
        self.inconsistent_edge_count() == 0
    }
}

/// Signed volume enclosed by the mesh (positive for outward winding).
///
/// Only meaningful for closed meshes.
pub fn signed_volume(mesh: &MeshBuffers) -> f64 {
    let mut volume = 0.0f64;
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);
        let pa = mesh.position_vec3(a as usize).as_dvec3();
        let pb = mesh.position_vec3(b as usize).as_dvec3();
        let pc = mesh.position_vec3(c as usize).as_dvec3();
        volume += pa.dot(pb.cross(pc));
    }
    volume / 6.0
}

/// Summary of mesh health used by tests, the CLI, and benchmarks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshReport {
    /// Total number of vertices (referenced or not).
    pub vertex_count: usize,
    /// Vertices not used by any triangle.
    pub unreferenced_vertex_count: usize,
    /// Total number of triangles.
    pub triangle_count: usize,
    /// Total number of unique edges.
    pub edge_count: usize,
    /// Edges with a single adjacent triangle.
    pub boundary_edge_count: usize,
    /// Edges with more than two adjacent triangles.
    pub non_manifold_edge_count: usize,
    /// Shared edges walked in the same direction by both triangles.
    pub inconsistent_edge_count: usize,
    /// Whether every edge has exactly two adjacent triangles.
    pub is_watertight: bool,
    /// Signed enclosed volume.
    pub signed_volume: f64,
}

impl MeshReport {
    /// Analyze a mesh.
    pub fn from_mesh(mesh: &MeshBuffers) -> Self {
        let topology = Topology::build(mesh);
        let unreferenced_vertex_count = mesh
            .referenced_vertices()
            .iter()
            .filter(|&&used| !used)
            .count();
        Self {
            vertex_count: mesh.vertex_count(),
            unreferenced_vertex_count,
            triangle_count: mesh.triangle_count(),
            edge_count: topology.edge_count(),
            boundary_edge_count: topology.boundary_edge_count(),
            non_manifold_edge_count: topology.non_manifold_edge_count(),
            inconsistent_edge_count: topology.inconsistent_edge_count(),
            is_watertight: topology.is_closed() && topology.edge_count() > 0,
            signed_volume: signed_volume(mesh),
        }
    }

    /// A solid is printable when closed, manifold, and wound outward.
    pub fn is_printable(&self) -> bool {
        self.is_watertight && self.inconsistent_edge_count == 0 && self.signed_volume > 0.0
    }
}

impl std::fmt::Display for MeshReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vertices:      {} ({} unreferenced)", self.vertex_count, self.unreferenced_vertex_count)?;
        writeln!(f, "Triangles:     {}", self.triangle_count)?;
        writeln!(f, "Edges:         {}", self.edge_count)?;
        writeln!(f, "Watertight:    {}", if self.is_watertight { "yes" } else { "no" })?;
        if self.boundary_edge_count > 0 {
            writeln!(f, "Boundary:      {}", self.boundary_edge_count)?;
        }
        if self.non_manifold_edge_count > 0 {
            writeln!(f, "Non-manifold:  {}", self.non_manifold_edge_count)?;
        }
        if self.inconsistent_edge_count > 0 {
            writeln!(f, "Misoriented:   {}", self.inconsistent_edge_count)?;
        }
        write!(f, "Volume:        {:.3}", self.signed_volume)
    }
}
