//! # relief-mesh
//!
//! Triangle mesh output buffers with a flat interleaved layout, ready to
//! hand to a renderer or a mesh-file exporter.
//!
//! ## Key Types
//!
//! - [`MeshBuffers`] — Flat vertex positions, triangle indices, optional normals.
//! - [`Topology`] — Edge adjacency and closed-surface checks.
//! - [`MeshReport`] — Watertightness / orientation summary.
//! - [`cleanup::remove_degenerate_triangles`] — Sliver removal.
//! - [`normals::compute_vertex_normals`] — Area-weighted vertex normals.

pub mod cleanup;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use mesh::MeshBuffers;
pub use normals::NormalQuality;
pub use topology::{MeshReport, Topology};
