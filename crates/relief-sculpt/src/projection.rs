//! Grid → 3D embeddings.

use std::f32::consts::TAU;

use relief_io::Projection;
use relief_math::Vec3;
use relief_types::constants::COOKIE_RIM_LIFT;

/// Maps grid samples to positions under one projection.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    projection: Projection,
    res: f32,
    half: f32,
}

impl Projector {
    pub fn new(projection: Projection, resolution: usize) -> Self {
        let res = resolution as f32;
        Self {
            projection,
            res,
            half: res / 2.0,
        }
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Position of the top-surface sample at `(x, y)` with height `h`.
    #[inline]
    pub fn top(&self, x: usize, y: usize, h: f32) -> Vec3 {
        let (fx, fy) = (x as f32, y as f32);
        match self.projection {
            Projection::Plane => Vec3::new(fx - self.half, h, fy - self.half),
            Projection::Cylinder => {
                let (sin, cos) = (fx / self.res * TAU).sin_cos();
                let r = self.cylinder_radius() + h;
                Vec3::new(cos * r, fy - self.half, sin * r)
            }
            Projection::Cookie => {
                let dx = fx - self.half;
                let dy = fy - self.half;
                let d = (dx * dx + dy * dy).sqrt() / self.half;
                Vec3::new(dx, h + d * d * COOKIE_RIM_LIFT, dy)
            }
        }
    }

    /// Position of the base sample at `(x, y)`.
    ///
    /// Same embedding at height 0; the cookie base stays flat.
    #[inline]
    pub fn base(&self, x: usize, y: usize) -> Vec3 {
        match self.projection {
            Projection::Plane | Projection::Cylinder => self.top(x, y, 0.0),
            Projection::Cookie => Vec3::new(x as f32 - self.half, 0.0, y as f32 - self.half),
        }
    }

    /// Radius of the cylinder at zero height.
    #[inline]
    pub fn cylinder_radius(&self) -> f32 {
        self.res / 4.0
    }
}
