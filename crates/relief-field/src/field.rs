//! Flat height-field storage.
//!
//! One contiguous row-major buffer of `resolution²` values. Filter stages
//! write into a caller-owned scratch buffer of the same length and then
//! swap it in, so a full enhancement run allocates two buffers total.

/// Square grid of scalar heights, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    resolution: usize,
    values: Vec<f32>,
}

impl HeightField {
    /// Field filled with `value`.
    pub fn constant(resolution: usize, value: f32) -> Self {
        Self {
            resolution,
            values: vec![value; resolution * resolution],
        }
    }

    /// Field built from `f(x, y)`.
    pub fn from_fn(resolution: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(resolution * resolution);
        for y in 0..resolution {
            for x in 0..resolution {
                values.push(f(x, y));
            }
        }
        Self { resolution, values }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.resolution + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.values[i] = value;
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Makes `scratch` the right size and swaps it in as the new field
    /// contents once `write` has filled it from the current values.
    pub fn replace_with(
        &mut self,
        scratch: &mut Vec<f32>,
        write: impl FnOnce(&[f32], &mut [f32]),
    ) {
        scratch.resize(self.values.len(), 0.0);
        write(&self.values, scratch);
        std::mem::swap(&mut self.values, scratch);
    }

    /// Replaces non-finite values with `fallback` and clamps to `[lo, hi]`.
    ///
    /// Returns the number of non-finite values that were replaced.
    pub fn sanitize(&mut self, lo: f32, hi: f32, fallback: f32) -> usize {
        let mut replaced = 0;
        for v in &mut self.values {
            if !v.is_finite() {
                *v = fallback;
                replaced += 1;
            }
            *v = v.clamp(lo, hi);
        }
        replaced
    }

    /// `(min, max)` over all cells.
    pub fn range(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}
