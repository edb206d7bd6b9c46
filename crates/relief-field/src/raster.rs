//! RGBA raster samples and resampling.
//!
//! Decoding from a file format happens outside this crate; callers hand
//! over already-decoded RGBA8 samples.

use relief_types::{ReliefError, ReliefResult};

/// A decoded RGBA8 image, row-major, four bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Wraps decoded samples.
    ///
    /// Fails with a decode error if the image has zero area or the sample
    /// buffer does not hold exactly `width × height` RGBA pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> ReliefResult<Self> {
        if width == 0 || height == 0 {
            return Err(ReliefError::Decode(format!(
                "Source image has zero area ({}x{})",
                width, height
            )));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| ReliefError::Decode("Source dimensions overflow".into()))?;
        if pixels.len() != expected {
            return Err(ReliefError::Decode(format!(
                "Expected {} RGBA bytes for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a raster by evaluating `f(x, y)` for every pixel.
    ///
    /// ```
    /// use relief_field::Raster;
    /// let r = Raster::from_fn(2, 2, |x, _| [x as u8 * 255, 0, 0, 255]).unwrap();
    /// assert_eq!(r.pixel(1, 0), [255, 0, 0, 255]);
    /// ```
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> [u8; 4],
    ) -> ReliefResult<Self> {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// A single-colour raster.
    pub fn solid(width: usize, height: usize, rgba: [u8; 4]) -> ReliefResult<Self> {
        Self::from_fn(width, height, |_, _| rgba)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Resamples to a `resolution × resolution` grid with bilinear filtering.
    ///
    /// Sample centres are aligned, so a source that already has the target
    /// size is reproduced exactly.
    pub fn resample(&self, resolution: usize) -> ReliefResult<Raster> {
        if resolution == 0 {
            return Err(ReliefError::config("resolution", "must be positive"));
        }
        if self.width == resolution && self.height == resolution {
            return Ok(self.clone());
        }

        let sx = self.width as f32 / resolution as f32;
        let sy = self.height as f32 / resolution as f32;
        let max_x = (self.width - 1) as f32;
        let max_y = (self.height - 1) as f32;

        Raster::from_fn(resolution, resolution, |x, y| {
            let fx = ((x as f32 + 0.5) * sx - 0.5).clamp(0.0, max_x);
            let fy = ((y as f32 + 0.5) * sy - 0.5).clamp(0.0, max_y);
            self.bilinear(fx, fy)
        })
    }

    fn bilinear(&self, fx: f32, fy: f32) -> [u8; 4] {
        let x0 = fx.floor() as usize;
        let y0 = fy.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let tx = fx - x0 as f32;
        let ty = fy - y0 as f32;

        let p00 = self.pixel(x0, y0);
        let p10 = self.pixel(x1, y0);
        let p01 = self.pixel(x0, y1);
        let p11 = self.pixel(x1, y1);

        let mut out = [0u8; 4];
        for c in 0..4 {
            let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
            let bottom = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
            out[c] = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}
