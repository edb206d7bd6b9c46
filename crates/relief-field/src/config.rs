//! Knobs for height-field synthesis and enhancement.
//!
//! These are the subsets of the user-facing settings record that each
//! phase needs. Defaults match the user-facing defaults.

use serde::{Deserialize, Serialize};

/// Configuration for the luminance → height mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Pull each value away from its 11×11 local mean.
    pub adaptive_contrast: bool,
    /// Gamma-like boost `v^(1/boost)`; 1.0 disables.
    pub contrast_boost: f32,
    /// Channel-divergence detail; active above 5.
    pub surface_detail: f32,
    /// Second gamma-like curve `v^(1/sharpness)`; 1.0 disables.
    pub edge_sharpness: f32,
    /// `v ← 1 - v`.
    pub invert: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            adaptive_contrast: true,
            contrast_boost: 1.5,
            surface_detail: 9.0,
            edge_sharpness: 2.0,
            invert: false,
        }
    }
}

impl SynthesisConfig {
    /// Plain luminance with no shaping.
    pub fn neutral() -> Self {
        Self {
            adaptive_contrast: false,
            contrast_boost: 1.0,
            surface_detail: 1.0,
            edge_sharpness: 1.0,
            invert: false,
        }
    }
}

/// Configuration for the enhancement filter chain.
///
/// Integer strengths of 0 disable the matching stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhanceConfig {
    pub anisotropic_diffusion: u32,
    pub multi_scale: bool,
    pub bilateral_filter: u32,
    /// Drives the bilateral range sigma: `0.1 × (11 - p) / 10`.
    pub edge_preservation: u32,
    pub noise_reduction: u32,
    pub smoothness: u32,
    pub gradient_enhancement: u32,
    pub laplacian_enhancement: u32,
    pub unsharp_masking: u32,
    /// Final power curve exponent; 1.0 disables.
    pub depth_enhancement: f32,
    /// Height span after rescaling.
    pub depth: f32,
    /// Height offset after rescaling.
    pub base_height: f32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            anisotropic_diffusion: 5,
            multi_scale: true,
            bilateral_filter: 6,
            edge_preservation: 8,
            noise_reduction: 5,
            smoothness: 6,
            gradient_enhancement: 6,
            laplacian_enhancement: 4,
            unsharp_masking: 4,
            depth_enhancement: 1.6,
            depth: 90.0,
            base_height: 12.0,
        }
    }
}

impl EnhanceConfig {
    /// Every filter off; only the linear depth rescale remains.
    pub fn disabled(depth: f32, base_height: f32) -> Self {
        Self {
            anisotropic_diffusion: 0,
            multi_scale: false,
            bilateral_filter: 0,
            edge_preservation: 8,
            noise_reduction: 0,
            smoothness: 0,
            gradient_enhancement: 0,
            laplacian_enhancement: 0,
            unsharp_masking: 0,
            depth_enhancement: 1.0,
            depth,
            base_height,
        }
    }

    /// Range sigma of the bilateral filter.
    pub fn bilateral_sigma_range(&self) -> f32 {
        0.1 * (11.0 - self.edge_preservation as f32) / 10.0
    }
}
