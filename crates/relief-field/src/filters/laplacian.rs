//! Discrete Laplacian enhancement.

use super::four_neighbors;

/// Adds `factor × mean(neighbour - centre)` over in-bounds 4-neighbours.
pub fn enhance_laplacian(src: &[f32], dst: &mut [f32], res: usize, factor: f32) {
    for y in 0..res {
        for x in 0..res {
            let center = src[y * res + x];
            let (sum, count) = four_neighbors(res, x, y)
                .fold((0.0f32, 0u32), |(s, c), n| (s + src[n] - center, c + 1));
            let laplacian = if count > 0 { sum / count as f32 } else { 0.0 };
            dst[y * res + x] = (center + laplacian * factor).clamp(0.0, 1.0);
        }
    }
}
