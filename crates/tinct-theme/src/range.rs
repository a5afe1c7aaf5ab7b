//! Range interpolator: background → foreground color ramps.
//!
//! A [`Range`] is one band of a gradient. Each band steps linearly from its
//! background toward its foreground in `count` steps; every channel of every
//! step is then reshaped by a [`CurveParams`] easing curve, and the raw
//! foreground is appended as the band's last color.
//!
//! ```text
//! band 0: bg ── step 0 ── step 1 ── … ── step count-1 ── fg
//! band 1:          step 1 ── … ── step count-1 ── fg      (starts at j = 1)
//! ```
//!
//! Within band `j` the step loop starts at `j`, not 0, so later bands drop
//! their first `j` samples. Existing palettes depend on the resulting token
//! indices, so this is kept as-is.

use serde::{Deserialize, Serialize};
use tinct_color::Color;

// ---------------------------------------------------------------------------
// CurveParams
// ---------------------------------------------------------------------------

/// An easing curve over one channel.
///
/// Inputs at or below the first point's x map to `start`, inputs at or
/// beyond the last point's x map to `end`; in between the value is blended
/// with [`interpolate`]. Points must have strictly increasing x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    pub start: f64,
    pub end: f64,
    pub points: Vec<(f64, f64)>,
}

impl CurveParams {
    #[must_use]
    pub const fn new(start: f64, end: f64, points: Vec<(f64, f64)>) -> Self {
        Self { start, end, points }
    }

    /// Identity over `[from, to]`: a straight line through both endpoints.
    #[must_use]
    pub fn identity(from: f64, to: f64) -> Self {
        Self::new(from, to, vec![(from, from), (to, to)])
    }

    /// Identity hue curve, 0–360.
    #[must_use]
    pub fn hue() -> Self {
        Self::identity(0.0, 360.0)
    }

    /// Identity saturation curve, 0–100.
    #[must_use]
    pub fn saturation() -> Self {
        Self::identity(0.0, 100.0)
    }

    /// Identity lightness curve, 0–100.
    #[must_use]
    pub fn lightness() -> Self {
        Self::identity(0.0, 100.0)
    }
}

/// Evaluate `params` at `value`.
///
/// With `(x0, y0)`/`(x3, y3)` the segment bracketing `value` and
/// `(x1, y1)`/`(x2, y2)` the curve's first and last points:
///
/// ```text
/// t = (value - x0) / (x3 - x0)
/// a = y3 - y2 - y0 + y1
/// b = y0 - y1 - a
/// c = y2 - y0
/// d = y1
/// result = a·t³ + b·t² + c·t + d
/// ```
///
/// A curve without points returns `start`.
#[must_use]
pub fn interpolate(params: &CurveParams, value: f64) -> f64 {
    let (Some(&(first_x, first_y)), Some(&(last_x, last_y))) =
        (params.points.first(), params.points.last())
    else {
        return params.start;
    };

    if value <= first_x {
        return params.start;
    }
    if value >= last_x {
        return params.end;
    }

    let Some(segment) = params.points.windows(2).find(|w| w[1].0 >= value) else {
        return params.end;
    };
    let (x0, y0) = segment[0];
    let (x3, y3) = segment[1];
    let (y1, y2) = (first_y, last_y);

    let t = (value - x0) / (x3 - x0);
    let a = y3 - y2 - y0 + y1;
    let b = y0 - y1 - a;
    let c = y2 - y0;
    let d = y1;

    a * t * t * t + b * t * t + c * t + d
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// One band of a gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub count: usize,
    pub background: Color,
    pub foreground: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue_curve: Option<CurveParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation_curve: Option<CurveParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness_curve: Option<CurveParams>,
}

impl Range {
    /// A band with identity curves.
    #[must_use]
    pub const fn new(count: usize, background: Color, foreground: Color) -> Self {
        Self {
            count,
            background,
            foreground,
            hue_curve: None,
            saturation_curve: None,
            lightness_curve: None,
        }
    }

    #[must_use]
    pub fn with_hue_curve(mut self, curve: CurveParams) -> Self {
        self.hue_curve = Some(curve);
        self
    }

    #[must_use]
    pub fn with_saturation_curve(mut self, curve: CurveParams) -> Self {
        self.saturation_curve = Some(curve);
        self
    }

    #[must_use]
    pub fn with_lightness_curve(mut self, curve: CurveParams) -> Self {
        self.lightness_curve = Some(curve);
        self
    }
}

/// Expand bands into a flat color sequence.
///
/// Band `j` contributes steps `j..count` followed by its foreground. Bands
/// are concatenated in order.
#[must_use]
pub fn range(ranges: &[Range]) -> Vec<Color> {
    let identity_hue = CurveParams::hue();
    let identity_saturation = CurveParams::saturation();
    let identity_lightness = CurveParams::lightness();

    let mut colors = Vec::new();

    for (j, band) in ranges.iter().enumerate() {
        let hue_curve = band.hue_curve.as_ref().unwrap_or(&identity_hue);
        let saturation_curve = band
            .saturation_curve
            .as_ref()
            .unwrap_or(&identity_saturation);
        let lightness_curve = band.lightness_curve.as_ref().unwrap_or(&identity_lightness);

        let bg = band.background;
        let fg = band.foreground;
        let count = band.count as f64;
        let hue_step = (fg.h - bg.h) / count;
        let saturation_step = (fg.s - bg.s) / count;
        let lightness_step = (fg.l - bg.l) / count;

        for i in j..band.count {
            let step = i as f64;
            let h = bg.h + hue_step * step;
            let s = bg.s + saturation_step * step;
            let l = bg.l + lightness_step * step;
            colors.push(Color::hsl(
                interpolate(hue_curve, h),
                interpolate(saturation_curve, s),
                interpolate(lightness_curve, l),
            ));
        }

        colors.push(fg);
    }

    colors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn curve() -> CurveParams {
        CurveParams::new(10.0, 100.0, vec![(0.0, 0.0), (10.0, 50.0), (20.0, 100.0)])
    }

    // ── interpolate ─────────────────────────────────────────────────

    #[test]
    fn interpolate_inside_first_segment() {
        assert_eq!(interpolate(&curve(), 5.0), 56.25);
    }

    #[test]
    fn interpolate_clamps_below() {
        assert_eq!(interpolate(&curve(), -1.0), 10.0);
        assert_eq!(interpolate(&curve(), 0.0), 10.0);
    }

    #[test]
    fn interpolate_clamps_above() {
        assert_eq!(interpolate(&curve(), 30.0), 100.0);
        assert_eq!(interpolate(&curve(), 20.0), 100.0);
    }

    #[test]
    fn interpolate_four_points() {
        let params = CurveParams::new(
            0.0,
            100.0,
            vec![(0.0, 0.0), (10.0, 50.0), (15.0, 70.0), (20.0, 100.0)],
        );
        let v = interpolate(&params, 12.0);
        assert!(approx_eq(v, 35.68, 1e-9), "got {v}");
    }

    #[test]
    fn interpolate_two_points_is_linear() {
        let params = CurveParams::new(0.0, 100.0, vec![(0.0, 0.0), (20.0, 100.0)]);
        assert_eq!(interpolate(&params, 10.0), 50.0);
    }

    #[test]
    fn interpolate_identity_passes_through() {
        let hue = CurveParams::hue();
        for v in [1.0, 45.5, 120.0, 359.0] {
            assert!(approx_eq(interpolate(&hue, v), v, 1e-9), "v={v}");
        }
    }

    #[test]
    fn interpolate_without_points_returns_start() {
        let params = CurveParams::new(7.0, 9.0, Vec::new());
        assert_eq!(interpolate(&params, 3.0), 7.0);
    }

    #[test]
    fn interpolate_boundary_law() {
        let params = curve();
        for x in [-100.0, -0.5, 0.0] {
            assert_eq!(interpolate(&params, x), params.start);
        }
        for x in [20.0, 20.5, 1e6] {
            assert_eq!(interpolate(&params, x), params.end);
        }
    }

    // ── range ───────────────────────────────────────────────────────

    #[test]
    fn single_band_identity() {
        let band = Range::new(
            5,
            Color::hsl(120.0, 50.0, 50.0),
            Color::hsl(240.0, 50.0, 50.0),
        );
        let colors = range(&[band]);
        let hues: Vec<f64> = colors.iter().map(|c| c.h).collect();
        assert_eq!(hues, vec![120.0, 144.0, 168.0, 192.0, 216.0, 240.0]);
        assert!(colors.iter().all(|c| c.s == 50.0 && c.l == 50.0));
    }

    #[test]
    fn later_bands_start_at_band_index() {
        let bg = Color::hsl(0.0, 0.0, 0.0);
        let fg = Color::hsl(0.0, 0.0, 50.0);
        let bands = [Range::new(5, bg, fg), Range::new(5, bg, fg), Range::new(5, bg, fg)];
        let colors = range(&bands);
        // 5 + 1, then 4 + 1, then 3 + 1.
        assert_eq!(colors.len(), 15);
        assert_eq!(colors[6].l, 10.0);
        assert_eq!(colors[11].l, 20.0);
    }

    #[test]
    fn foreground_is_last_in_each_band() {
        let fg = Color::hsl(300.0, 10.0, 90.0);
        let colors = range(&[Range::new(3, Color::ZERO, fg)]);
        assert_eq!(colors.last(), Some(&fg));
    }

    #[test]
    fn custom_curve_reshapes_channel() {
        let band = Range::new(2, Color::hsl(0.0, 0.0, 0.0), Color::hsl(0.0, 0.0, 100.0))
            .with_lightness_curve(CurveParams::new(
                0.0,
                100.0,
                vec![(0.0, 0.0), (100.0, 100.0)],
            ));
        let colors = range(&[band]);
        assert_eq!(
            colors.iter().map(|c| c.l).collect::<Vec<_>>(),
            vec![0.0, 50.0, 100.0]
        );
    }

    #[test]
    fn band_index_past_count_emits_only_foreground() {
        let fg = Color::hsl(10.0, 20.0, 30.0);
        let bands = [Range::new(1, Color::ZERO, fg), Range::new(1, Color::ZERO, fg)];
        let colors = range(&bands);
        assert_eq!(colors, vec![Color::ZERO, fg, fg]);
    }

    #[test]
    fn empty_input() {
        assert!(range(&[]).is_empty());
    }
}
