//! Benchmark scenarios — a procedural raster plus settings for each case.
//!
//! 1. **Flat gray** — uniform image, exercises the planar fast path
//! 2. **Gradient** — horizontal ramp, smooth monotone relief
//! 3. **Radial dome** — bright centre fading to the rim
//! 4. **Checkerboard** — hard edges everywhere (filter stress test)
//! 5. **Centre spot** — black image with one bright block

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use relief_field::Raster;
use relief_io::Settings;
use relief_types::{ReliefError, ReliefResult};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    FlatGray,
    Gradient,
    RadialDome,
    Checkerboard,
    CentreSpot,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::FlatGray,
            ScenarioKind::Gradient,
            ScenarioKind::RadialDome,
            ScenarioKind::Checkerboard,
            ScenarioKind::CentreSpot,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FlatGray => "flat_gray",
            ScenarioKind::Gradient => "gradient",
            ScenarioKind::RadialDome => "radial_dome",
            ScenarioKind::Checkerboard => "checkerboard",
            ScenarioKind::CentreSpot => "centre_spot",
        }
    }
}

impl FromStr for ScenarioKind {
    type Err = ReliefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                ReliefError::config(
                    "scenario",
                    format!("unknown scenario `{s}`, expected one of {}", names.join(", ")),
                )
            })
    }
}

/// Side length of every procedural source image.
pub const SOURCE_SIZE: usize = 128;

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Source image.
    pub raster: Raster,
    /// Pipeline settings.
    pub settings: Settings,
    /// Number of timed runs.
    pub repetitions: u32,
}

fn gray(v: f32) -> [u8; 4] {
    let g = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [g, g, g, 255]
}

impl Scenario {
    /// Uniform mid-gray image.
    pub fn flat_gray() -> ReliefResult<Self> {
        let raster = Raster::solid(SOURCE_SIZE, SOURCE_SIZE, [128, 128, 128, 255])?;
        Ok(Self::with_raster(ScenarioKind::FlatGray, raster))
    }

    /// Left-to-right ramp from black to white.
    pub fn gradient() -> ReliefResult<Self> {
        let span = (SOURCE_SIZE - 1) as f32;
        let raster = Raster::from_fn(SOURCE_SIZE, SOURCE_SIZE, |x, _| gray(x as f32 / span))?;
        Ok(Self::with_raster(ScenarioKind::Gradient, raster))
    }

    /// Bright dome centred in the image.
    pub fn radial_dome() -> ReliefResult<Self> {
        let half = SOURCE_SIZE as f32 / 2.0;
        let raster = Raster::from_fn(SOURCE_SIZE, SOURCE_SIZE, |x, y| {
            let dx = (x as f32 + 0.5 - half) / half;
            let dy = (y as f32 + 0.5 - half) / half;
            gray(1.0 - (dx * dx + dy * dy))
        })?;
        Ok(Self::with_raster(ScenarioKind::RadialDome, raster))
    }

    /// 8×8 black and white checkerboard.
    pub fn checkerboard() -> ReliefResult<Self> {
        let cell = SOURCE_SIZE / 8;
        let raster = Raster::from_fn(SOURCE_SIZE, SOURCE_SIZE, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                gray(1.0)
            } else {
                gray(0.0)
            }
        })?;
        Ok(Self::with_raster(ScenarioKind::Checkerboard, raster))
    }

    /// Black image with one bright block in the middle.
    pub fn centre_spot() -> ReliefResult<Self> {
        let lo = SOURCE_SIZE * 7 / 16;
        let hi = SOURCE_SIZE * 9 / 16;
        let raster = Raster::from_fn(SOURCE_SIZE, SOURCE_SIZE, |x, y| {
            if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
                gray(1.0)
            } else {
                gray(0.0)
            }
        })?;
        Ok(Self::with_raster(ScenarioKind::CentreSpot, raster))
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> ReliefResult<Self> {
        match kind {
            ScenarioKind::FlatGray => Self::flat_gray(),
            ScenarioKind::Gradient => Self::gradient(),
            ScenarioKind::RadialDome => Self::radial_dome(),
            ScenarioKind::Checkerboard => Self::checkerboard(),
            ScenarioKind::CentreSpot => Self::centre_spot(),
        }
    }

    /// Replaces the pipeline settings.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    fn with_raster(kind: ScenarioKind, raster: Raster) -> Self {
        Self {
            kind,
            raster,
            settings: Settings::draft(),
            repetitions: 3,
        }
    }
}
