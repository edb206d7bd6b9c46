//! 7×7 Gaussian smoothing, `w = exp(-d²/5)`.

use relief_math::Kernel;

pub fn smoothing_kernel() -> Kernel {
    Kernel::gaussian(3, 5.0)
}
