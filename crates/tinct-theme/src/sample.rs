//! Seed-color sampling from images.
//!
//! The dominant color is the most frequent whole-degree hue among sampled
//! pixels, restricted to pixels inside the configured lightness, saturation,
//! and hue bounds (all exclusive). A bucket only takes over when it grows
//! past the current maximum on a pixel that is itself within bounds, so the
//! reported color is that pixel's RGB.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tinct_color::{Color, color::rgb_to_hsl};

use crate::error::{Result, ThemeError};

/// Exclusive bounds: `gt < value < lt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub gt: f64,
    pub lt: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(gt: f64, lt: f64) -> Self {
        Self { gt, lt }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value > self.gt && value < self.lt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub light: Bounds,
    pub saturation: Bounds,
    pub hue: Bounds,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            light: Bounds::new(20.0, 80.0),
            saturation: Bounds::new(20.0, 90.0),
            hue: Bounds::new(0.0, 360.0),
        }
    }
}

impl Limits {
    fn admit(&self, color: Color) -> bool {
        self.light.contains(color.l)
            && self.saturation.contains(color.s)
            && self.hue.contains(color.h)
    }
}

/// Sampled region, in percent of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            cx: 0.0,
            cy: 0.0,
            width: 100.0,
            height: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    pub limits: Limits,
    /// Sample every `quality`-th pixel.
    pub quality: usize,
    pub position: Position,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            quality: 10,
            position: Position::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Dominant color of an RGBA8 buffer. Black when no pixel is admitted.
#[must_use]
pub fn dominant_color(rgba: &[u8], options: &SampleOptions) -> Color {
    let step = options.quality.max(1).saturating_mul(4);
    let mut counts = [0u32; 361];
    let mut max = 0;
    let mut dominant = [0u8; 3];

    for cursor in (0..rgba.len()).step_by(step) {
        let Some(&[r, g, b]) = rgba.get(cursor..cursor + 3) else {
            break;
        };
        let color = rgb_to_hsl(r, g, b);
        let bucket = &mut counts[hue_bucket(color.h)];
        *bucket += 1;

        if *bucket > max && options.limits.admit(color) {
            max = *bucket;
            dominant = [r, g, b];
        }
    }

    rgb_to_hsl(dominant[0], dominant[1], dominant[2])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hue_bucket(h: f64) -> usize {
    // Safe: clamped to the table range before truncation.
    h.floor().clamp(0.0, 360.0) as usize
}

/// Pixel rectangle `(x, y, width, height)` for `position` on a
/// `width × height` image, clipped to the image.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn crop_region(width: u32, height: u32, position: &Position) -> (u32, u32, u32, u32) {
    let percent = |value: u32, percent: f64| {
        let value = f64::from(value);
        if percent >= 0.0 {
            value * percent / 100.0
        } else {
            value
        }
    };
    let or_full = |p: f64| if p == 0.0 { 100.0 } else { p };

    // Safe: every value is clamped into 0..=dimension before truncation.
    let x = (percent(width, position.cx).clamp(0.0, f64::from(width))) as u32;
    let y = (percent(height, position.cy).clamp(0.0, f64::from(height))) as u32;
    let w = (percent(width, or_full(position.width)).clamp(0.0, f64::from(width - x))) as u32;
    let h = (percent(height, or_full(position.height)).clamp(0.0, f64::from(height - y))) as u32;
    (x, y, w, h)
}

/// Decode the image at `path` and return its dominant color.
pub fn sample_image(path: &Path, options: &SampleOptions) -> Result<Color> {
    let image = image::open(path)?;
    let (x, y, w, h) = crop_region(image.width(), image.height(), &options.position);
    if w == 0 || h == 0 {
        return Err(ThemeError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    let pixels = image.crop_imm(x, y, w, h).to_rgba8();
    let color = dominant_color(pixels.as_raw(), options);

    tracing::debug!(
        path = %path.display(),
        region = ?(x, y, w, h),
        quality = options.quality,
        %color,
        "sampled image"
    );
    Ok(color)
}

/// Sample `path` and hand the result to `callback`, which runs exactly
/// once. Failures are logged and reported as black.
pub fn sample_with<F>(path: &Path, options: &SampleOptions, callback: F)
where
    F: FnOnce(Color),
{
    let color = sample_image(path, options).unwrap_or_else(|err| {
        tracing::error!(path = %path.display(), error = %err, "image sampling failed");
        Color::ZERO
    });
    callback(color);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
