//! Scalar type alias for height fields and mesh buffers.
//!
//! Mesh consumers (renderers, exporters) expect single-precision
//! vertex data, so the whole pipeline works in `f32`.

/// The floating-point type used throughout the pipeline.
pub type Scalar = f32;
