//! Scalar-field filters.
//!
//! Each filter is a single pass `src → dst` over a square row-major grid
//! of side `res`. Windows are clipped at the borders and normalized by
//! the weights actually visited. Iteration and clamping are handled by
//! the stage wrappers in [`crate::enhance`].

pub mod bilateral;
pub mod diffusion;
pub mod gradient;
pub mod laplacian;
pub mod median;
pub mod multiscale;
pub mod smoothing;
pub mod unsharp;

use relief_math::Kernel;

/// Weighted mean of the clipped window around `(x, y)`.
#[inline]
pub(crate) fn convolve_at(src: &[f32], res: usize, x: usize, y: usize, kernel: &Kernel) -> f32 {
    let r = kernel.radius() as i32;
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
            let w = kernel.weight(kx, ky);
            sum += src[ny as usize * res + nx as usize] * w;
            weight_sum += w;
        }
    }
    sum / weight_sum
}

/// One full convolution pass.
pub fn convolve(src: &[f32], dst: &mut [f32], res: usize, kernel: &Kernel) {
    for y in 0..res {
        for x in 0..res {
            dst[y * res + x] = convolve_at(src, res, x, y, kernel);
        }
    }
}

/// In-bounds 4-neighbours of `(x, y)` as flat indices.
#[inline]
pub(crate) fn four_neighbors(res: usize, x: usize, y: usize) -> impl Iterator<Item = usize> {
    let up = (y > 0).then(|| (y - 1) * res + x);
    let down = (y + 1 < res).then(|| (y + 1) * res + x);
    let left = (x > 0).then(|| y * res + x - 1);
    let right = (x + 1 < res).then(|| y * res + x + 1);
    [up, down, left, right].into_iter().flatten()
}
