//! Settings validation.
//!
//! Runs before any processing so an out-of-range knob fails fast with
//! the setting's name attached.

use relief_types::constants::{MAX_RESOLUTION, MIN_RESOLUTION};
use relief_types::{ReliefError, ReliefResult};

use crate::contract::Settings;

impl Settings {
    /// Validates every field; see [`validate_settings`].
    pub fn validate(&self) -> ReliefResult<()> {
        validate_settings(self)
    }
}

/// Validates every field of `settings`.
///
/// Checks:
/// - Resolution within `[2, 1024]`
/// - Depth and base height finite and non-negative
/// - Float knobs finite and within their documented ranges
/// - Integer knobs within their documented ranges
pub fn validate_settings(settings: &Settings) -> ReliefResult<()> {
    if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&settings.resolution) {
        return Err(ReliefError::config(
            "resolution",
            format!(
                "{} is outside [{}, {}]",
                settings.resolution, MIN_RESOLUTION, MAX_RESOLUTION
            ),
        ));
    }

    non_negative("depth", settings.depth)?;
    non_negative("baseHeight", settings.base_height)?;

    float_in("edgeSharpness", settings.edge_sharpness, 0.5, 3.0)?;
    float_in("contrastBoost", settings.contrast_boost, 0.5, 2.5)?;
    float_in("depthEnhancement", settings.depth_enhancement, 0.5, 2.5)?;

    int_in("surfaceDetail", settings.surface_detail, 1, 10)?;
    int_in("smoothness", settings.smoothness, 0, 10)?;
    int_in("noiseReduction", settings.noise_reduction, 0, 10)?;
    int_in("bilateralFilter", settings.bilateral_filter, 0, 10)?;
    int_in("laplacianEnhancement", settings.laplacian_enhancement, 0, 10)?;
    int_in("edgePreservation", settings.edge_preservation, 0, 10)?;
    int_in("anisotropicDiffusion", settings.anisotropic_diffusion, 0, 10)?;
    int_in("unsharpMasking", settings.unsharp_masking, 0, 10)?;
    int_in("gradientEnhancement", settings.gradient_enhancement, 0, 10)?;

    Ok(())
}

fn non_negative(setting: &'static str, value: f32) -> ReliefResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ReliefError::config(
            setting,
            format!("{value} must be finite and non-negative"),
        ));
    }
    Ok(())
}

fn float_in(setting: &'static str, value: f32, lo: f32, hi: f32) -> ReliefResult<()> {
    if !value.is_finite() || value < lo || value > hi {
        return Err(ReliefError::config(
            setting,
            format!("{value} is outside [{lo}, {hi}]"),
        ));
    }
    Ok(())
}

fn int_in(setting: &'static str, value: u32, lo: u32, hi: u32) -> ReliefResult<()> {
    if value < lo || value > hi {
        return Err(ReliefError::config(
            setting,
            format!("{value} is outside [{lo}, {hi}]"),
        ));
    }
    Ok(())
}
