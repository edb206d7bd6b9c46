//! # relief-math
//!
//! Math primitives for the Relief pipeline.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`)
//! - Square convolution kernels with precomputed weights

pub mod kernel;

pub use kernel::Kernel;

// Re-export glam types as the canonical math types for Relief.
pub use glam::Vec3;
