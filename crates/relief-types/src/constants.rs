//! Pipeline constants and tuning defaults.

/// BT.709 luminance weight for the red channel.
pub const LUMA_R: f32 = 0.2126;

/// BT.709 luminance weight for the green channel.
pub const LUMA_G: f32 = 0.7152;

/// BT.709 luminance weight for the blue channel.
pub const LUMA_B: f32 = 0.0722;

/// Half-width of the adaptive-contrast window (window is 11×11).
pub const ADAPTIVE_CONTRAST_RADIUS: usize = 5;

/// Fraction of the local deviation added back by adaptive contrast.
pub const ADAPTIVE_CONTRAST_GAIN: f32 = 0.3;

/// Surface-detail knob value at and below which the stage is inactive.
pub const SURFACE_DETAIL_MIDPOINT: f32 = 5.0;

/// Maximum fraction of channel divergence turned into height.
pub const SURFACE_DETAIL_GAIN: f32 = 0.7;

/// Edge threshold κ for anisotropic diffusion.
pub const DIFFUSION_KAPPA: f32 = 0.1;

/// Diffusion rate λ for anisotropic diffusion.
pub const DIFFUSION_LAMBDA: f32 = 0.2;

/// Spatial sigma of the bilateral filter (cells).
pub const BILATERAL_SIGMA_SPACE: f32 = 2.0;

/// Hard iteration caps per iterative stage.
pub const MAX_DIFFUSION_PASSES: u32 = 8;
pub const MAX_BILATERAL_PASSES: u32 = 8;
pub const MAX_MEDIAN_PASSES: u32 = 6;
pub const MAX_SMOOTHING_PASSES: u32 = 10;

/// Radial lift applied at the rim of the cookie projection.
pub const COOKIE_RIM_LIFT: f32 = 35.0;

/// Triangles whose doubled area is at or below this are dropped.
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1.0e-3;

/// Accumulated normals shorter than this are left as zero.
pub const NORMAL_EPSILON: f32 = 1.0e-12;

/// Smallest grid for which a quad mesh exists.
pub const MIN_RESOLUTION: u32 = 2;

/// Upper bound on grid resolution (keeps index math inside `u32`).
pub const MAX_RESOLUTION: u32 = 1024;
