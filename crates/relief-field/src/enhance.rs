//! The enhancement pipeline.
//!
//! Nine stages run in a fixed order. Each enabled stage is a [`Stage`]
//! value with a uniform `apply(field, scratch)` signature; the active list
//! is assembled from [`EnhanceConfig`] at call time. Stages 1–8 keep the
//! field in `[0, 1]`; the depth stage rescales it to
//! `[base_height, base_height + depth]`.

use serde::{Deserialize, Serialize};
use relief_types::constants::{
    MAX_BILATERAL_PASSES, MAX_DIFFUSION_PASSES, MAX_MEDIAN_PASSES, MAX_SMOOTHING_PASSES,
};
use relief_types::{ReliefError, ReliefResult};
use tracing::{debug, warn};

use crate::config::EnhanceConfig;
use crate::field::HeightField;
use crate::filters::{
    bilateral, convolve, diffusion, gradient, laplacian, median, multiscale, smoothing, unsharp,
};

/// Identifies a pipeline slot, whether or not it is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageKind {
    AnisotropicDiffusion,
    MultiScale,
    Bilateral,
    NoiseReduction,
    Smoothing,
    Gradient,
    Laplacian,
    UnsharpMask,
    Depth,
}

impl StageKind {
    /// All slots in execution order.
    pub const ALL: [StageKind; 9] = [
        StageKind::AnisotropicDiffusion,
        StageKind::MultiScale,
        StageKind::Bilateral,
        StageKind::NoiseReduction,
        StageKind::Smoothing,
        StageKind::Gradient,
        StageKind::Laplacian,
        StageKind::UnsharpMask,
        StageKind::Depth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StageKind::AnisotropicDiffusion => "anisotropic_diffusion",
            StageKind::MultiScale => "multi_scale",
            StageKind::Bilateral => "bilateral_filter",
            StageKind::NoiseReduction => "noise_reduction",
            StageKind::Smoothing => "smoothing",
            StageKind::Gradient => "gradient_enhancement",
            StageKind::Laplacian => "laplacian_enhancement",
            StageKind::UnsharpMask => "unsharp_masking",
            StageKind::Depth => "depth_enhancement",
        }
    }
}

/// One configured enhancement step.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    AnisotropicDiffusion { passes: u32 },
    MultiScale,
    Bilateral { passes: u32, sigma_range: f32 },
    NoiseReduction { passes: u32 },
    Smoothing { passes: u32 },
    Gradient { factor: f32 },
    Laplacian { factor: f32 },
    UnsharpMask { amount: f32 },
    Depth { exponent: f32, depth: f32, base_height: f32 },
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::AnisotropicDiffusion { .. } => StageKind::AnisotropicDiffusion,
            Stage::MultiScale => StageKind::MultiScale,
            Stage::Bilateral { .. } => StageKind::Bilateral,
            Stage::NoiseReduction { .. } => StageKind::NoiseReduction,
            Stage::Smoothing { .. } => StageKind::Smoothing,
            Stage::Gradient { .. } => StageKind::Gradient,
            Stage::Laplacian { .. } => StageKind::Laplacian,
            Stage::UnsharpMask { .. } => StageKind::UnsharpMask,
            Stage::Depth { .. } => StageKind::Depth,
        }
    }

    /// Runs the stage, replacing the field contents.
    ///
    /// `scratch` is reused across stages; its contents on entry are ignored.
    pub fn apply(&self, field: &mut HeightField, scratch: &mut Vec<f32>) -> ReliefResult<()> {
        let res = field.resolution();
        if field.values().len() != res * res {
            return Err(ReliefError::processing(
                self.kind().name(),
                "height field buffer does not match its resolution",
            ));
        }

        match *self {
            Stage::AnisotropicDiffusion { passes } => {
                for _ in 0..passes.min(MAX_DIFFUSION_PASSES) {
                    field.replace_with(scratch, |src, dst| diffusion::diffuse(src, dst, res));
                }
            }
            Stage::MultiScale => {
                field.replace_with(scratch, |src, dst| multiscale::blend(src, dst, res));
            }
            Stage::Bilateral { passes, sigma_range } => {
                let spatial = bilateral::spatial_kernel();
                for _ in 0..passes.min(MAX_BILATERAL_PASSES) {
                    field.replace_with(scratch, |src, dst| {
                        bilateral::bilateral(src, dst, res, &spatial, sigma_range)
                    });
                }
            }
            Stage::NoiseReduction { passes } => {
                for _ in 0..passes.min(MAX_MEDIAN_PASSES) {
                    field.replace_with(scratch, |src, dst| median::median(src, dst, res));
                }
            }
            Stage::Smoothing { passes } => {
                let kernel = smoothing::smoothing_kernel();
                for _ in 0..passes.min(MAX_SMOOTHING_PASSES) {
                    field.replace_with(scratch, |src, dst| convolve(src, dst, res, &kernel));
                }
            }
            Stage::Gradient { factor } => {
                field.replace_with(scratch, |src, dst| {
                    gradient::enhance_gradient(src, dst, res, factor)
                });
            }
            Stage::Laplacian { factor } => {
                field.replace_with(scratch, |src, dst| {
                    laplacian::enhance_laplacian(src, dst, res, factor)
                });
            }
            Stage::UnsharpMask { amount } => {
                let kernel = unsharp::blur_kernel();
                scratch.resize(res * res, 0.0);
                unsharp::unsharp_mask(field.values_mut(), scratch, res, &kernel, amount);
            }
            Stage::Depth {
                exponent,
                depth,
                base_height,
            } => {
                for v in field.values_mut() {
                    if exponent != 1.0 {
                        *v = v.powf(exponent);
                    }
                    *v = *v * depth + base_height;
                }
            }
        }

        let replaced = match *self {
            Stage::Depth {
                depth, base_height, ..
            } => field.sanitize(base_height, base_height + depth, base_height),
            _ => field.sanitize(0.0, 1.0, 0.0),
        };
        if replaced > 0 {
            warn!(stage = self.kind().name(), replaced, "Clamped non-finite heights");
        }
        Ok(())
    }
}

/// Ordered list of enabled stages.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementPipeline {
    stages: Vec<Stage>,
}

impl EnhancementPipeline {
    /// Assembles the active stages from configuration.
    ///
    /// The depth stage is always present because it performs the final
    /// rescale; its power curve is skipped when the exponent is 1.0.
    pub fn from_config(config: &EnhanceConfig) -> Self {
        let mut stages = Vec::with_capacity(StageKind::ALL.len());

        if config.anisotropic_diffusion > 0 {
            stages.push(Stage::AnisotropicDiffusion {
                passes: config.anisotropic_diffusion,
            });
        }
        if config.multi_scale {
            stages.push(Stage::MultiScale);
        }
        if config.bilateral_filter > 0 {
            stages.push(Stage::Bilateral {
                passes: config.bilateral_filter,
                sigma_range: config.bilateral_sigma_range(),
            });
        }
        if config.noise_reduction > 0 {
            stages.push(Stage::NoiseReduction {
                passes: config.noise_reduction,
            });
        }
        if config.smoothness > 0 {
            stages.push(Stage::Smoothing {
                passes: config.smoothness,
            });
        }
        if config.gradient_enhancement > 0 {
            stages.push(Stage::Gradient {
                factor: config.gradient_enhancement as f32 / 10.0,
            });
        }
        if config.laplacian_enhancement > 0 {
            stages.push(Stage::Laplacian {
                factor: config.laplacian_enhancement as f32 / 10.0,
            });
        }
        if config.unsharp_masking > 0 {
            stages.push(Stage::UnsharpMask {
                amount: config.unsharp_masking as f32 / 10.0,
            });
        }
        stages.push(Stage::Depth {
            exponent: config.depth_enhancement,
            depth: config.depth,
            base_height: config.base_height,
        });

        Self { stages }
    }

    /// The enabled stages, in execution order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs every stage.
    pub fn run(&self, field: &mut HeightField) -> ReliefResult<()> {
        self.run_with(field, |_, _| {})
    }

    /// Runs every stage, calling `after` once per slot in [`StageKind::ALL`]
    /// order with the field as it stands after that slot (skipped slots
    /// included).
    pub fn run_with(
        &self,
        field: &mut HeightField,
        mut after: impl FnMut(StageKind, &HeightField),
    ) -> ReliefResult<()> {
        let mut scratch: Vec<f32> = Vec::with_capacity(field.values().len());
        let mut pending = self.stages.iter().peekable();

        for kind in StageKind::ALL {
            if let Some(stage) = pending.next_if(|s| s.kind() == kind) {
                stage.apply(field, &mut scratch)?;
                let (lo, hi) = field.range();
                debug!(stage = kind.name(), min = lo, max = hi, "Applied enhancement stage");
            }
            after(kind, field);
        }
        Ok(())
    }
}
