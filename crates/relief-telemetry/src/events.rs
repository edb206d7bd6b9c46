//! Progress event types.
//!
//! Each milestone has a fixed percentage so a progress bar advances the
//! same way on every run, whichever stages are enabled.

use serde::{Deserialize, Serialize};

/// A checkpoint in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Milestone {
    /// Raster resampled to the target grid.
    Sampled,
    /// Luminance mapped to heights.
    Synthesized,
    AnisotropicDiffusion,
    MultiScale,
    BilateralFilter,
    NoiseReduction,
    Smoothing,
    GradientEnhancement,
    LaplacianEnhancement,
    UnsharpMasking,
    /// Power curve and rescale to final heights.
    DepthRescaled,
    /// Top surface projected and triangulated.
    TopSurface,
    /// Base vertices appended.
    BaseVertices,
    /// Base cap triangulated.
    BaseCap,
    /// Side walls closed (or skipped for an open sheet).
    Closed,
    /// Degenerate triangles removed.
    Optimized,
    /// Vertex normals computed; the mesh is complete.
    Normals,
}

impl Milestone {
    /// All milestones in emission order.
    pub const ALL: [Milestone; 17] = [
        Milestone::Sampled,
        Milestone::Synthesized,
        Milestone::AnisotropicDiffusion,
        Milestone::MultiScale,
        Milestone::BilateralFilter,
        Milestone::NoiseReduction,
        Milestone::Smoothing,
        Milestone::GradientEnhancement,
        Milestone::LaplacianEnhancement,
        Milestone::UnsharpMasking,
        Milestone::DepthRescaled,
        Milestone::TopSurface,
        Milestone::BaseVertices,
        Milestone::BaseCap,
        Milestone::Closed,
        Milestone::Optimized,
        Milestone::Normals,
    ];

    /// Completion percentage reported when this milestone is reached.
    pub fn percent(&self) -> u8 {
        match self {
            Milestone::Sampled => 2,
            Milestone::Synthesized => 8,
            Milestone::AnisotropicDiffusion => 15,
            Milestone::MultiScale => 22,
            Milestone::BilateralFilter => 30,
            Milestone::NoiseReduction => 38,
            Milestone::Smoothing => 46,
            Milestone::GradientEnhancement => 54,
            Milestone::LaplacianEnhancement => 60,
            Milestone::UnsharpMasking => 66,
            Milestone::DepthRescaled => 72,
            Milestone::TopSurface => 77,
            Milestone::BaseVertices => 80,
            Milestone::BaseCap => 84,
            Milestone::Closed => 88,
            Milestone::Optimized => 94,
            Milestone::Normals => 100,
        }
    }
}

/// A progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub milestone: Milestone,
    /// Completion in `[0, 100]`.
    pub percent: u8,
}

impl From<Milestone> for ProgressEvent {
    fn from(milestone: Milestone) -> Self {
        Self {
            milestone,
            percent: milestone.percent(),
        }
    }
}
