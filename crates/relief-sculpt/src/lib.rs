//! # relief-sculpt
//!
//! Turns an RGBA raster into a watertight triangle mesh.
//!
//! ```text
//! raster ─► sample ─► synthesize ─► enhance ─► project + triangulate
//!        ─► close solid ─► drop degenerates ─► normals ─► MeshBuffers
//! ```
//!
//! ## Key Entry Points
//!
//! - [`generate_mesh`] — Full pipeline from raster and settings.
//! - [`generate_mesh_from_field`] — Geometry stages only, from a finished height field.
//! - [`spawn_generate`] — Runs the pipeline on a worker thread.

pub mod pipeline;
pub mod projection;
pub mod solid;
pub mod surface;

pub use pipeline::{generate_mesh, generate_mesh_from_field, spawn_generate};
pub use projection::Projector;
