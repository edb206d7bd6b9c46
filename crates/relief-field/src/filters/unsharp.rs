//! Unsharp masking.

use relief_math::Kernel;

use super::convolve;

/// 5×5 blur used to extract the high-frequency residual, `w = exp(-d²/3)`.
pub fn blur_kernel() -> Kernel {
    Kernel::gaussian(2, 3.0)
}

/// Sharpens `field` in place: `v + amount × (v - blur(v))`.
///
/// `blurred` is scratch space of the same length.
pub fn unsharp_mask(field: &mut [f32], blurred: &mut [f32], res: usize, kernel: &Kernel, amount: f32) {
    convolve(field, blurred, res, kernel);
    for (v, &b) in field.iter_mut().zip(blurred.iter()) {
        *v = (*v + amount * (*v - b)).clamp(0.0, 1.0);
    }
}
