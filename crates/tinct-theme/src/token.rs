//! Token emitter: one color becomes a pair of custom properties.
//!
//! ```text
//! --primary-50-token: 210.00 50.00% 50.00%;
//! --primary-50: hsl(var(--primary-50-token));
//! ```
//!
//! The raw `-token` property holds bare channel values so it can be reused
//! inside other color functions; the wrapper is what selectors consume.
//! With a gamut the raw value switches to float RGB channels and the wrapper
//! to `color(<gamut> ...)`.

use std::fmt;

use tinct_color::{Color, Gamut, color::color_space};

/// A custom-property declaration; `property` excludes the leading `--`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}:{}", self.property, self.value)
    }
}

/// The colors a token takes in each scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenColors {
    pub light: Color,
    pub dark: Option<Color>,
}

/// `[raw, wrapper]` declarations per scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub light: [Declaration; 2],
    pub dark: Option<[Declaration; 2]>,
}

/// Name of the raw-value property for token `name`.
#[must_use]
pub fn raw_name(name: &str) -> String {
    format!("{name}-token")
}

/// Wrapper expression referencing the raw property of `name`.
#[must_use]
pub fn wrapper(name: &str, gamut: Option<&Gamut>) -> String {
    let raw = raw_name(name);
    match gamut {
        Some(gamut) => format!("color({gamut} var(--{raw}))"),
        None => format!("hsl(var(--{raw}))"),
    }
}

/// Build the declarations for token `name`.
#[must_use]
pub fn css_token(name: &str, colors: &TokenColors, gamut: Option<&Gamut>) -> TokenPair {
    let pair = |color: Color| {
        [
            Declaration::new(raw_name(name), color_space(color, gamut)),
            Declaration::new(name, wrapper(name, gamut)),
        ]
    };

    TokenPair {
        light: pair(colors.light),
        dark: colors.dark.map(pair),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn colors(dark: Option<Color>) -> TokenColors {
        TokenColors {
            light: Color::hsl(210.0, 50.0, 50.0),
            dark,
        }
    }

    #[test]
    fn hsl_token() {
        let pair = css_token("primary-50", &colors(None), None);
        assert_eq!(
            pair.light,
            [
                Declaration::new("primary-50-token", "210.00 50.00% 50.00%"),
                Declaration::new("primary-50", "hsl(var(--primary-50-token))"),
            ]
        );
        assert_eq!(pair.dark, None);
    }

    #[test]
    fn dark_pair_uses_dark_color() {
        let pair = css_token("primary-50", &colors(Some(Color::hsl(210.0, 50.0, 20.0))), None);
        let dark = pair.dark.unwrap();
        assert_eq!(dark[0].value, "210.00 50.00% 20.00%");
        assert_eq!(dark[1], pair.light[1]);
    }

    #[test]
    fn gamut_token() {
        let gamut = Gamut::from("p3");
        let pair = css_token("test-token", &colors(None), Some(&gamut));
        assert_eq!(pair.light[0].property, "test-token-token");
        assert_eq!(pair.light[1].value, "color(p3 var(--test-token-token))");
    }

    #[test]
    fn gamut_token_uses_rgb_floats() {
        let pair = css_token("x", &colors(None), Some(&Gamut::DisplayP3));
        assert_eq!(pair.light[0].value.split(", ").count(), 3);
        assert!(!pair.light[0].value.contains('%'));
    }

    #[test]
    fn declaration_display() {
        let decl = Declaration::new("a-token", "1 2% 3%");
        assert_eq!(decl.to_string(), "--a-token:1 2% 3%");
    }
}
