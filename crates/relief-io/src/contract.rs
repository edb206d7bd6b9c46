//! Pipeline input contract.

use serde::{Deserialize, Serialize};
use relief_field::{EnhanceConfig, SynthesisConfig};
use relief_mesh::NormalQuality;
use relief_types::{ReliefError, ReliefResult};

/// 3D embedding applied to each `(x, y, height)` grid sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Flat relief: height along +Y.
    #[default]
    Plane,
    /// Grid x wraps around a cylinder of radius `resolution / 4`.
    Cylinder,
    /// Plane with a quadratic radial rim lift.
    Cookie,
}

impl Projection {
    pub fn name(&self) -> &'static str {
        match self {
            Projection::Plane => "plane",
            Projection::Cylinder => "cylinder",
            Projection::Cookie => "cookie",
        }
    }
}

impl std::str::FromStr for Projection {
    type Err = ReliefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plane" => Ok(Projection::Plane),
            "cylinder" => Ok(Projection::Cylinder),
            "cookie" => Ok(Projection::Cookie),
            other => Err(ReliefError::config(
                "projection",
                format!("unknown projection '{other}' (expected plane, cylinder, cookie)"),
            )),
        }
    }
}

/// Every knob of a mesh-generation request.
///
/// Missing keys in a settings document take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Grid side length (cells per row and column).
    pub resolution: u32,
    /// Height span of the relief.
    pub depth: f32,
    /// Height of the lowest relief point above the base.
    pub base_height: f32,
    pub projection: Projection,
    /// Gaussian smoothing passes, 0–10.
    pub smoothness: u32,
    /// Gamma-like sharpening curve, 0.5–3.
    pub edge_sharpness: f32,
    /// Colour-divergence detail, 1–10 (active above 5).
    pub surface_detail: u32,
    /// Median passes, 0–10 (capped at 6).
    pub noise_reduction: u32,
    /// Gamma-like contrast curve, 0.5–2.5.
    pub contrast_boost: f32,
    /// Final power curve, 0.5–2.5.
    pub depth_enhancement: f32,
    /// Bilateral passes, 0–10 (capped at 8).
    pub bilateral_filter: u32,
    pub laplacian_enhancement: u32,
    pub multi_scale_processing: bool,
    /// Bilateral edge preservation, 0–10.
    pub edge_preservation: u32,
    /// Drop zero-area triangles.
    pub mesh_optimization: bool,
    /// Diffusion passes, 0–10 (capped at 8).
    pub anisotropic_diffusion: u32,
    pub unsharp_masking: u32,
    pub gradient_enhancement: u32,
    pub adaptive_contrast: bool,
    pub invert_depth: bool,
    /// Pick each quad's diagonal by height difference.
    pub adaptive_resolution: bool,
    pub high_quality_normals: bool,
    /// Close the sheet into a solid with a base and side walls.
    pub generate_solid: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: 128,
            depth: 90.0,
            base_height: 12.0,
            projection: Projection::Plane,
            smoothness: 6,
            edge_sharpness: 2.0,
            surface_detail: 9,
            noise_reduction: 5,
            contrast_boost: 1.5,
            depth_enhancement: 1.6,
            bilateral_filter: 6,
            laplacian_enhancement: 4,
            multi_scale_processing: true,
            edge_preservation: 8,
            mesh_optimization: true,
            anisotropic_diffusion: 5,
            unsharp_masking: 4,
            gradient_enhancement: 6,
            adaptive_contrast: true,
            invert_depth: false,
            adaptive_resolution: true,
            high_quality_normals: true,
            generate_solid: true,
        }
    }
}

impl Settings {
    /// Fast preview preset (low resolution, light filtering).
    pub fn draft() -> Self {
        Self {
            resolution: 64,
            smoothness: 2,
            noise_reduction: 1,
            bilateral_filter: 2,
            anisotropic_diffusion: 2,
            ..Default::default()
        }
    }

    /// Dense preset for final exports.
    pub fn high_quality() -> Self {
        Self {
            resolution: 256,
            bilateral_filter: 8,
            anisotropic_diffusion: 8,
            ..Default::default()
        }
    }

    /// Every enhancement stage and luminance shaping step off.
    pub fn unfiltered() -> Self {
        Self {
            smoothness: 0,
            edge_sharpness: 1.0,
            surface_detail: 1,
            noise_reduction: 0,
            contrast_boost: 1.0,
            depth_enhancement: 1.0,
            bilateral_filter: 0,
            laplacian_enhancement: 0,
            multi_scale_processing: false,
            anisotropic_diffusion: 0,
            unsharp_masking: 0,
            gradient_enhancement: 0,
            adaptive_contrast: false,
            ..Default::default()
        }
    }

    /// Parses a TOML settings document.
    pub fn from_toml_str(text: &str) -> ReliefResult<Self> {
        toml::from_str(text).map_err(|e| ReliefError::Serialization(format!("settings TOML: {e}")))
    }

    /// Parses a JSON settings document.
    pub fn from_json_str(text: &str) -> ReliefResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| ReliefError::Serialization(format!("settings JSON: {e}")))
    }

    /// Grid side length as `usize`.
    pub fn grid_size(&self) -> usize {
        self.resolution as usize
    }

    /// Knobs for the luminance → height mapping.
    pub fn synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig {
            adaptive_contrast: self.adaptive_contrast,
            contrast_boost: self.contrast_boost,
            surface_detail: self.surface_detail as f32,
            edge_sharpness: self.edge_sharpness,
            invert: self.invert_depth,
        }
    }

    /// Knobs for the enhancement filters.
    pub fn enhance_config(&self) -> EnhanceConfig {
        EnhanceConfig {
            anisotropic_diffusion: self.anisotropic_diffusion,
            multi_scale: self.multi_scale_processing,
            bilateral_filter: self.bilateral_filter,
            edge_preservation: self.edge_preservation,
            noise_reduction: self.noise_reduction,
            smoothness: self.smoothness,
            gradient_enhancement: self.gradient_enhancement,
            laplacian_enhancement: self.laplacian_enhancement,
            unsharp_masking: self.unsharp_masking,
            depth_enhancement: self.depth_enhancement,
            depth: self.depth,
            base_height: self.base_height,
        }
    }

    /// Normal tier from `highQualityNormals`.
    pub fn normal_quality(&self) -> NormalQuality {
        NormalQuality::from_high_quality(self.high_quality_normals)
    }
}
