//! 3×3 median filter.

/// One median pass. Border windows hold fewer samples; for an even count
/// the upper median is taken.
pub fn median(src: &[f32], dst: &mut [f32], res: usize) {
    let mut window = [0.0f32; 9];
    for y in 0..res {
        for x in 0..res {
            let mut n = 0;
            for ny in y.saturating_sub(1)..=(y + 1).min(res - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(res - 1) {
                    window[n] = src[ny * res + nx];
                    n += 1;
                }
            }
            let samples = &mut window[..n];
            samples.sort_unstable_by(f32::total_cmp);
            dst[y * res + x] = samples[n / 2];
        }
    }
}
