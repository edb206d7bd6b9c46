//! 5×5 bilateral filter.

use relief_math::Kernel;
use relief_types::constants::BILATERAL_SIGMA_SPACE;

/// Spatial part of the bilateral weight, `exp(-d² / 2σ²)`.
pub fn spatial_kernel() -> Kernel {
    Kernel::gaussian(2, 2.0 * BILATERAL_SIGMA_SPACE * BILATERAL_SIGMA_SPACE)
}

/// One bilateral pass with range sigma `sigma_range`.
///
/// The centre sample always carries weight 1, so the normalizer never
/// vanishes.
pub fn bilateral(src: &[f32], dst: &mut [f32], res: usize, spatial: &Kernel, sigma_range: f32) {
    let r = spatial.radius() as i32;
    let range_denom = 2.0 * sigma_range * sigma_range;
    for y in 0..res {
        for x in 0..res {
            let center = src[y * res + x];
            let mut sum = 0.0f32;
            let mut weight_sum = 0.0f32;
            for ky in -r..=r {
                let ny = y as i32 + ky;
                if ny < 0 || ny >= res as i32 {
                    continue;
                }
                for kx in -r..=r {
                    let nx = x as i32 + kx;
                    if nx < 0 || nx >= res as i32 {
                        continue;
                    }
                    let v = src[ny as usize * res + nx as usize];
                    let dv = v - center;
                    let w = spatial.weight(kx, ky) * (-(dv * dv) / range_denom).exp();
                    sum += v * w;
                    weight_sum += w;
                }
            }
            dst[y * res + x] = sum / weight_sum;
        }
    }
}
