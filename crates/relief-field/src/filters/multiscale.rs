//! Multi-scale blend of fine and coarse structure.

use std::sync::OnceLock;

use relief_math::Kernel;

use super::convolve_at;

/// Box radii and their blend weights, applied in order.
pub const SCALES: [(usize, f32); 3] = [(1, 0.5), (2, 0.3), (4, 0.2)];

fn kernels() -> &'static [Kernel; 3] {
    static KERNELS: OnceLock<[Kernel; 3]> = OnceLock::new();
    KERNELS.get_or_init(|| SCALES.map(|(radius, _)| Kernel::box_filter(radius)))
}

/// Blends each cell toward box averages of the input at every scale.
///
/// The averages are always taken over `src`, not the partially blended
/// value.
pub fn blend(src: &[f32], dst: &mut [f32], res: usize) {
    let kernels = kernels();
    for y in 0..res {
        for x in 0..res {
            let mut v = src[y * res + x];
            for (kernel, &(_, weight)) in kernels.iter().zip(SCALES.iter()) {
                let avg = convolve_at(src, res, x, y, kernel);
                v = v * (1.0 - weight) + avg * weight;
            }
            dst[y * res + x] = v;
        }
    }
}
