//! Height-field synthesis from raster luminance.
//!
//! Per cell, in fixed order: BT.709 luminance, adaptive contrast,
//! contrast boost, surface detail, edge sharpness, invert.

use relief_types::constants::{
    ADAPTIVE_CONTRAST_GAIN, ADAPTIVE_CONTRAST_RADIUS, LUMA_B, LUMA_G, LUMA_R,
    SURFACE_DETAIL_GAIN, SURFACE_DETAIL_MIDPOINT,
};
use relief_types::{ReliefError, ReliefResult};
use tracing::{debug, warn};

use crate::config::SynthesisConfig;
use crate::field::HeightField;
use crate::raster::Raster;

/// Perceptual luminance of an RGBA pixel in `[0, 1]`.
#[inline]
pub fn luminance(rgba: [u8; 4]) -> f32 {
    (rgba[0] as f32 * LUMA_R + rgba[1] as f32 * LUMA_G + rgba[2] as f32 * LUMA_B) / 255.0
}

/// Channel divergence `|r-g| + |g-b| + |b-r|` normalized by its maximum (765).
#[inline]
pub fn channel_divergence(rgba: [u8; 4]) -> f32 {
    let r = rgba[0] as i32;
    let g = rgba[1] as i32;
    let b = rgba[2] as i32;
    ((r - g).abs() + (g - b).abs() + (b - r).abs()) as f32 / 765.0
}

/// Builds the normalized height field from a square raster.
///
/// The raster must already be sampled to the target resolution.
pub fn synthesize(raster: &Raster, config: &SynthesisConfig) -> ReliefResult<HeightField> {
    let res = raster.width();
    if raster.height() != res {
        return Err(ReliefError::processing(
            "synthesize",
            format!("raster is {}x{}, expected a square grid", raster.width(), raster.height()),
        ));
    }

    let luma: Vec<f32> = (0..res * res)
        .map(|i| luminance(raster.pixel(i % res, i / res)))
        .collect();

    let local_mean = if config.adaptive_contrast {
        Some(LocalMean::new(&luma, res))
    } else {
        None
    };
    let detail_factor = if config.surface_detail > SURFACE_DETAIL_MIDPOINT {
        (config.surface_detail - SURFACE_DETAIL_MIDPOINT) / SURFACE_DETAIL_MIDPOINT * SURFACE_DETAIL_GAIN
    } else {
        0.0
    };

    let mut field = HeightField::from_fn(res, |x, y| {
        let i = y * res + x;
        let mut v = luma[i];

        if let Some(mean) = &local_mean {
            let avg = mean.at(x, y, ADAPTIVE_CONTRAST_RADIUS);
            v = (v + (v - avg) * ADAPTIVE_CONTRAST_GAIN).clamp(0.0, 1.0);
        }

        if config.contrast_boost != 1.0 {
            v = v.powf(1.0 / config.contrast_boost).clamp(0.0, 1.0);
        }

        if detail_factor > 0.0 {
            v = (v + channel_divergence(raster.pixel(x, y)) * detail_factor).clamp(0.0, 1.0);
        }

        if config.edge_sharpness != 1.0 {
            v = v.powf(1.0 / config.edge_sharpness);
        }

        if config.invert {
            v = 1.0 - v;
        }

        v
    });

    let replaced = field.sanitize(0.0, 1.0, 0.0);
    if replaced > 0 {
        warn!(replaced, "Synthesis produced non-finite heights");
    }
    let (lo, hi) = field.range();
    debug!(resolution = res, min = lo, max = hi, "Synthesized height field");
    Ok(field)
}

/// Box means over a clipped window, via a summed-area table.
struct LocalMean {
    res: usize,
    /// `(res+1)²` prefix sums; f64 keeps the differences exact enough.
    table: Vec<f64>,
}

impl LocalMean {
    fn new(values: &[f32], res: usize) -> Self {
        let stride = res + 1;
        let mut table = vec![0.0f64; stride * stride];
        for y in 0..res {
            let mut row = 0.0f64;
            for x in 0..res {
                row += values[y * res + x] as f64;
                table[(y + 1) * stride + x + 1] = table[y * stride + x + 1] + row;
            }
        }
        Self { res, table }
    }

    fn at(&self, x: usize, y: usize, radius: usize) -> f32 {
        let stride = self.res + 1;
        let x0 = x.saturating_sub(radius);
        let y0 = y.saturating_sub(radius);
        let x1 = (x + radius + 1).min(self.res);
        let y1 = (y + radius + 1).min(self.res);
        let sum = self.table[y1 * stride + x1] - self.table[y0 * stride + x1]
            - self.table[y1 * stride + x0]
            + self.table[y0 * stride + x0];
        let count = ((x1 - x0) * (y1 - y0)) as f64;
        (sum / count) as f32
    }
}
