//! Square convolution kernels.
//!
//! A kernel stores `(2r+1)²` weights row-major. Filters that clip the
//! window at grid borders renormalize by the weights they actually used,
//! so the weights here are never pre-normalized.

/// A square `(2r+1) × (2r+1)` weight stencil.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    radius: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Uniform (box) kernel of the given radius.
    ///
    /// ```
    /// use relief_math::Kernel;
    /// let k = Kernel::box_filter(1);
    /// assert_eq!(k.size(), 3);
    /// assert_eq!(k.weight(-1, 1), 1.0);
    /// ```
    pub fn box_filter(radius: usize) -> Self {
        let size = 2 * radius + 1;
        Self {
            radius,
            weights: vec![1.0; size * size],
        }
    }

    /// Distance-weighted kernel with `w = exp(-d² / falloff)`.
    ///
    /// `falloff` is the full denominator, i.e. `2σ²` for a textbook
    /// Gaussian of standard deviation σ.
    pub fn gaussian(radius: usize, falloff: f32) -> Self {
        let size = 2 * radius + 1;
        let r = radius as i32;
        let mut weights = Vec::with_capacity(size * size);
        for ky in -r..=r {
            for kx in -r..=r {
                let d2 = (kx * kx + ky * ky) as f32;
                weights.push((-d2 / falloff).exp());
            }
        }
        Self { radius, weights }
    }

    /// Kernel half-width.
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Side length (`2r + 1`).
    #[inline]
    pub fn size(&self) -> usize {
        2 * self.radius + 1
    }

    /// Weight at offset `(kx, ky)` from the centre.
    ///
    /// Offsets must lie in `[-r, r]`.
    #[inline]
    pub fn weight(&self, kx: i32, ky: i32) -> f32 {
        let r = self.radius as i32;
        let size = self.size();
        self.weights[(ky + r) as usize * size + (kx + r) as usize]
    }

    /// All weights, row-major.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}
