//! Gradient-magnitude enhancement.

/// Adds `factor × |∇v|` using central differences. On the border the
/// derivative along the clipped axis is taken as zero.
pub fn enhance_gradient(src: &[f32], dst: &mut [f32], res: usize, factor: f32) {
    for y in 0..res {
        for x in 0..res {
            let gx = if x > 0 && x + 1 < res {
                (src[y * res + x + 1] - src[y * res + x - 1]) / 2.0
            } else {
                0.0
            };
            let gy = if y > 0 && y + 1 < res {
                (src[(y + 1) * res + x] - src[(y - 1) * res + x]) / 2.0
            } else {
                0.0
            };
            let magnitude = (gx * gx + gy * gy).sqrt();
            dst[y * res + x] = (src[y * res + x] + magnitude * factor).clamp(0.0, 1.0);
        }
    }
}
