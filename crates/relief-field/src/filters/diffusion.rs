//! Perona–Malik anisotropic diffusion.
//!
//! Flux toward each 4-neighbour is damped by `exp(-g²/κ²)`, so strong
//! steps (edges) barely move while flat regions smooth out.

use relief_types::constants::{DIFFUSION_KAPPA, DIFFUSION_LAMBDA};

use super::four_neighbors;

/// One diffusion pass.
pub fn diffuse(src: &[f32], dst: &mut [f32], res: usize) {
    let k2 = DIFFUSION_KAPPA * DIFFUSION_KAPPA;
    for y in 0..res {
        for x in 0..res {
            let center = src[y * res + x];
            let flux: f32 = four_neighbors(res, x, y)
                .map(|n| {
                    let g = src[n] - center;
                    (-(g * g) / k2).exp() * g
                })
                .sum();
            dst[y * res + x] = center + DIFFUSION_LAMBDA * flux;
        }
    }
}
