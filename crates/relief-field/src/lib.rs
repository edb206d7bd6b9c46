//! # relief-field
//!
//! Everything that happens before geometry: the source raster is
//! resampled to a square grid, turned into a normalized height field,
//! and pushed through the ordered enhancement filters.
//!
//! ## Key Types
//!
//! - [`Raster`] — RGBA8 samples plus the bilinear resampler.
//! - [`HeightField`] — Flat row-major scalar grid.
//! - [`EnhancementPipeline`] — Ordered list of active [`Stage`]s built from config.
//! - [`SynthesisConfig`] / [`EnhanceConfig`] — Knobs for each phase.

pub mod config;
pub mod enhance;
pub mod field;
pub mod filters;
pub mod raster;
pub mod synth;

pub use config::{EnhanceConfig, SynthesisConfig};
pub use enhance::{EnhancementPipeline, Stage, StageKind};
pub use field::HeightField;
pub use raster::Raster;
pub use synth::synthesize;
