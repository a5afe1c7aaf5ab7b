// SPDX-License-Identifier: MIT
//
// WCAG contrast ratio and readable text-color selection.
//
// Luminance is measured on 8-bit sRGB (the WCAG definition); the search for
// a readable text color moves along HSL lightness only, so the text keeps
// the hue and saturation of the surface it sits on.
//
// Targets:
//
//   > 7.5:1  preferred (comfortably above WCAG AAA 7:1)
//   > 4.5:1  fallback  (WCAG AA for normal text)

use crate::color::{Color, Rgb, hex_to_rgb, sector_rgb};

/// Preferred contrast for generated text colors.
pub const ENHANCED_RATIO: f64 = 7.5;

/// Minimum contrast accepted when the preferred target is unreachable.
pub const MINIMUM_RATIO: f64 = 4.5;

/// Relative luminance per WCAG 2.1, in [0.0, 1.0].
///
/// Each channel is linearized (linear segment at or below 0.03928, 2.4 power
/// curve above) and weighted `0.2126 R + 0.7152 G + 0.0722 B`.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r = linearize(rgb.r);
    let g = linearize(rgb.g);
    let b = linearize(rgb.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio, `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Symmetric in its arguments; in [1.0, 21.0].
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// [`contrast_ratio`] for two `#rrggbb` strings.
///
/// Returns `None` if either string does not carry three hex pairs.
#[must_use]
pub fn contrast_ratio_hex(a: &str, b: &str) -> Option<f64> {
    Some(contrast_ratio(hex_to_rgb(a)?, hex_to_rgb(b)?))
}

/// Pick a readable text color for text drawn on `color`.
///
/// Scans whole lightness values 0..=99 at the input's hue and saturation and
/// keeps those beating [`ENHANCED_RATIO`] and [`MINIMUM_RATIO`]. The result
/// uses the qualifying lightness closest to the input's own (first match
/// wins a tie), preferring the enhanced set.
///
/// A handful of saturated mid-tones (e.g. `hsl(237 100% 67%)`) reach neither
/// threshold anywhere on the scale. For those the result is pure black or
/// white lightness (0 or 100), whichever contrasts more.
#[must_use]
pub fn text_color(color: Color) -> Color {
    let surface = sector_rgb(color.h, color.s, color.l);

    let mut enhanced = Vec::new();
    let mut minimum = Vec::new();
    for light in 0..100u8 {
        let candidate = sector_rgb(color.h, color.s, f64::from(light));
        let ratio = contrast_ratio(surface, candidate);
        if ratio > MINIMUM_RATIO {
            minimum.push(light);
        }
        if ratio > ENHANCED_RATIO {
            enhanced.push(light);
        }
    }

    let l = closest(&enhanced, color.l)
        .or_else(|| closest(&minimum, color.l))
        .unwrap_or_else(|| extreme_lightness(surface));

    color.with_lightness(l)
}

/// Left-to-right scan keeping the value strictly closer to `target`.
fn closest(values: &[u8], target: f64) -> Option<f64> {
    values.iter().map(|&v| f64::from(v)).reduce(|previous, current| {
        if (current - target).abs() < (previous - target).abs() {
            current
        } else {
            previous
        }
    })
}

fn extreme_lightness(surface: Rgb) -> f64 {
    if contrast_ratio(surface, Rgb::BLACK) >= contrast_ratio(surface, Rgb::WHITE) {
        0.0
    } else {
        100.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hsl_to_hex;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgb::BLACK);
        assert!(approx_eq(lum, 0.0, 0.001), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(Rgb::new(128, 128, 128));
        assert!(approx_eq(lum, 0.2158, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 0.001));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 0.001));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 0.001));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_white_black_is_exactly_21() {
        assert_eq!(contrast_ratio_hex("#ffffff", "#000000"), Some(21.0));
        assert_eq!(contrast_ratio_hex("#000000", "#ffffff"), Some(21.0));
    }

    #[test]
    fn contrast_is_symmetric() {
        let pairs = [("#ff0000", "#00ff00"), ("#0000ff", "#ffff00"), ("#c86432", "#1a2b3c")];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio_hex(a, b), contrast_ratio_hex(b, a));
        }
    }

    #[test]
    fn contrast_known_pairs() {
        let rg = contrast_ratio_hex("#ff0000", "#00ff00").unwrap();
        assert!(approx_eq(rg, 2.91, 0.01), "red/green: {rg}");
        let by = contrast_ratio_hex("#0000ff", "#ffff00").unwrap();
        assert!(approx_eq(by, 8.0, 0.01), "blue/yellow: {by}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let ratio = contrast_ratio(Rgb::new(40, 80, 120), Rgb::new(40, 80, 120));
        assert!(approx_eq(ratio, 1.0, 1e-12));
    }

    #[test]
    fn contrast_hex_rejects_short_strings() {
        assert_eq!(contrast_ratio_hex("#fff", "#000000"), None);
    }

    // ── text_color ──────────────────────────────────────────────────

    #[test]
    fn text_color_on_black() {
        assert_eq!(text_color(Color::hsl(120.0, 50.0, 0.0)).l, 47.0);
    }

    #[test]
    fn text_color_on_white() {
        assert_eq!(text_color(Color::hsl(120.0, 50.0, 100.0)).l, 25.0);
    }

    #[test]
    fn text_color_keeps_hue_and_saturation() {
        let surface = Color::hsl(210.0, 50.0, 50.0);
        let text = text_color(surface);
        assert_eq!(text.h, surface.h);
        assert_eq!(text.s, surface.s);
    }

    #[test]
    fn text_color_meets_preferred_ratio() {
        for l in [0.0, 10.0, 20.0, 80.0, 90.0, 100.0] {
            let surface = Color::hsl(210.0, 50.0, l);
            let text = text_color(surface);
            let ratio =
                contrast_ratio_hex(&surface.to_hex(), &hsl_to_hex(text.h, text.s, text.l)).unwrap();
            assert!(ratio > ENHANCED_RATIO, "l={l}: ratio {ratio}");
        }
    }

    #[test]
    fn text_color_falls_back_to_minimum_ratio() {
        // Mid gray can't reach 7.5:1 against any gray.
        let text = text_color(Color::hsl(0.0, 0.0, 50.0));
        assert_eq!(text.l, 9.0);
    }

    #[test]
    fn text_color_unreachable_uses_extreme() {
        // hsl(237 100% 67%) reaches 4.5:1 against neither end of the scale;
        // white contrasts slightly more than black.
        let text = text_color(Color::hsl(237.0, 100.0, 67.0));
        assert_eq!(text.l, 100.0);
    }
}
