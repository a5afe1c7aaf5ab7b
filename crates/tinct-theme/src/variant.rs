//! Built-in light and dark ramp generators.
//!
//! Each generator turns a seed into two 5-step [`Range`] bands, which the
//! range interpolator expands into 11 colors.

use tinct_color::Color;

use crate::range::Range;

/// Signature of a variant generator.
pub type VariantFn = fn(Color) -> Vec<Range>;

/// Dark ramp: from a mid-dark surface scaled by the seed's lightness down
/// to near black.
#[must_use]
pub fn dark(color: Color) -> Vec<Range> {
    let Color { h, s, l } = color;
    vec![
        Range::new(
            5,
            Color::hsl(h, s, 30.0 + l * 0.2),
            Color::hsl(h, s, 15.0 + l * 0.1),
        ),
        Range::new(5, Color::hsl(h, s, 15.0 + l * 0.1), Color::hsl(h, s, 2.0)),
    ]
}

/// Light ramp: from black through the seed up to white.
///
/// The first band starts at lightness 0 with saturation `min(0, s - 24)`,
/// which is 0 for any seed saturated at 24% or more.
#[must_use]
pub fn light(color: Color) -> Vec<Range> {
    let Color { h, s, .. } = color;
    vec![
        Range::new(5, Color::hsl(h, 0.0_f64.min(s - 24.0), 0.0), color),
        Range::new(5, color, Color::hsl(h, s, 100.0)),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::range;
    use pretty_assertions::assert_eq;

    fn seed() -> Color {
        Color::hsl(120.0, 75.0, 50.0)
    }

    #[test]
    fn dark_bands() {
        let bands = dark(seed());
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].background, Color::hsl(120.0, 75.0, 40.0));
        assert_eq!(bands[0].foreground, Color::hsl(120.0, 75.0, 20.0));
        assert_eq!(bands[1].background, Color::hsl(120.0, 75.0, 20.0));
        assert_eq!(bands[1].foreground, Color::hsl(120.0, 75.0, 2.0));
        assert!(bands.iter().all(|b| b.count == 5));
    }

    #[test]
    fn light_bands() {
        let bands = light(seed());
        assert_eq!(bands[0].background, Color::hsl(120.0, 0.0, 0.0));
        assert_eq!(bands[0].foreground, seed());
        assert_eq!(bands[1].background, seed());
        assert_eq!(bands[1].foreground, Color::hsl(120.0, 75.0, 100.0));
    }

    #[test]
    fn light_keeps_negative_saturation_for_gray_seeds() {
        let bands = light(Color::hsl(0.0, 10.0, 50.0));
        assert_eq!(bands[0].background.s, -14.0);
    }

    #[test]
    fn both_expand_to_eleven() {
        let seed = Color::hsl(210.0, 50.0, 50.0);
        assert_eq!(range(&light(seed)).len(), 11);
        assert_eq!(range(&dark(seed)).len(), 11);
    }

    #[test]
    fn light_ramp_lightness() {
        let seed = Color::hsl(210.0, 50.0, 50.0);
        let ls: Vec<f64> = range(&light(seed)).iter().map(|c| c.l).collect();
        assert_eq!(
            ls,
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
        );
    }

    #[test]
    fn dark_ramp_descends() {
        let seed = Color::hsl(210.0, 50.0, 50.0);
        let colors = range(&dark(seed));
        assert_eq!(colors[0].l, 40.0);
        assert_eq!(colors[5].l, 20.0);
        assert_eq!(colors[10].l, 2.0);
        assert!(colors.windows(2).all(|w| w[0].l > w[1].l));
    }
}
