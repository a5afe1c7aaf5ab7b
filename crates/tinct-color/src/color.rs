// SPDX-License-Identifier: MIT
//
// tinct color system — HSL-native, with hex/rgb parsing and gamut output.
//
// HSL is the working space for every palette operation: ranges step
// linearly through hue, saturation and lightness, harmonies rotate hue,
// and text colors are found by scanning lightness. RGB only appears at the
// edges (parsing input, measuring contrast, emitting wide-gamut tokens).
//
// Two HSL → RGB paths exist and both are kept:
//
//   hsl_to_rgb  — hue2rgb formulation, used for gamut output
//   hsl_to_hex  — 60° sector formulation, used for contrast measurement
//
// They agree for in-range input but round differently at the margins, and
// the text-color search is calibrated against the sector path.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// - `h`: hue angle in degrees, taken modulo 360 before use
/// - `s`: saturation in percent, nominally 0–100
/// - `l`: lightness in percent, nominally 0–100
///
/// Intermediate values produced by palette math are not clamped.
///
/// ```
/// use tinct_color::Color;
///
/// let red = Color::hsl(0.0, 100.0, 50.0);
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    /// Black. Also the sentinel every failed normalization falls back to.
    pub const ZERO: Self = Self::hsl(0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation, different lightness.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Rotate the hue by `degrees`, wrapping with `%` (sign preserved).
    #[inline]
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees) % 360.0,
            ..self
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({})", hsl_color_space(*self))
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsl(self) -> Color {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

// ─── Gamut ───────────────────────────────────────────────────────────────────

/// A CSS predefined RGB color space, used as `color(<gamut> r g b)`.
///
/// Unknown names are carried through verbatim so newer color spaces work
/// without a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gamut {
    Srgb,
    SrgbLinear,
    DisplayP3,
    A98Rgb,
    ProphotoRgb,
    Rec2020,
    Other(String),
}

impl Gamut {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Srgb => "srgb",
            Self::SrgbLinear => "srgb-linear",
            Self::DisplayP3 => "display-p3",
            Self::A98Rgb => "a98-rgb",
            Self::ProphotoRgb => "prophoto-rgb",
            Self::Rec2020 => "rec2020",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Gamut {
    fn from(name: &str) -> Self {
        match name {
            "srgb" => Self::Srgb,
            "srgb-linear" => Self::SrgbLinear,
            "display-p3" => Self::DisplayP3,
            "a98-rgb" => Self::A98Rgb,
            "prophoto-rgb" => Self::ProphotoRgb,
            "rec2020" => Self::Rec2020,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Gamut {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Gamut> for String {
    fn from(gamut: Gamut) -> Self {
        gamut.as_str().to_owned()
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── ColorInput ──────────────────────────────────────────────────────────────

/// A color as accepted at configuration boundaries.
///
/// Deserializes from either a string (`"#36f"`, `"#3366ff"`,
/// `"rgb(51, 102, 255)"`) or an `{ h, s, l }` table. Normalize it with
/// [`color_to_hsl`] before handing it to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Hsl(Color),
    Text(String),
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        Self::Hsl(color)
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ─── HSL → RGB ───────────────────────────────────────────────────────────────

/// Convert HSL to 8-bit RGB using the hue2rgb formulation.
///
/// Saturation 0 is achromatic: every channel is `round(l * 255 / 100)`.
/// Channels are rounded half-up and clamped to 0–255.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_channel(r * 255.0), to_channel(g * 255.0), to_channel(b * 255.0))
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert HSL to a lowercase `#rrggbb` string.
///
/// Uses the six 60° hue sectors. The hue is reduced with `%` first, so a
/// negative hue matches no sector and only the lightness offset remains.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    sector_rgb(h, s, l).to_hex()
}

/// The RGB quantization behind [`hsl_to_hex`].
pub(crate) fn sector_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let hue = h % 360.0;
    let saturation = s / 100.0;
    let lightness = l / 100.0;

    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&hue) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&hue) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&hue) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&hue) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&hue) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&hue) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Rgb::new(
        to_channel((r + m) * 255.0),
        to_channel((g + m) * 255.0),
        to_channel((b + m) * 255.0),
    )
}

// ─── Hex / RGB → HSL ─────────────────────────────────────────────────────────

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{3}){1,2}$").expect("hex color pattern is valid")
});

/// Parse `#RGB` / `#RRGGBB` (case-insensitive) into HSL.
///
/// Hue is rounded to whole degrees in [0, 360); saturation and lightness to
/// whole percent. Returns `None` for anything else, including a missing `#`.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<Color> {
    if !HEX_PATTERN.is_match(hex) {
        return None;
    }

    let digits = &hex[1..];
    let (r, g, b) = if digits.len() == 3 {
        let d = digits.as_bytes();
        (
            parse_hex_pair(d[0], d[0])?,
            parse_hex_pair(d[1], d[1])?,
            parse_hex_pair(d[2], d[2])?,
        )
    } else {
        let d = digits.as_bytes();
        (
            parse_hex_pair(d[0], d[1])?,
            parse_hex_pair(d[2], d[3])?,
            parse_hex_pair(d[4], d[5])?,
        )
    };

    let red = f64::from(r) / 255.0;
    let green = f64::from(g) / 255.0;
    let blue = f64::from(b) / 255.0;

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let diff = max - min;

    let mut h = if diff == 0.0 {
        0.0
    } else if max == red {
        ((green - blue) / diff) % 6.0
    } else if max == green {
        (blue - red) / diff + 2.0
    } else {
        (red - green) / diff + 4.0
    };

    h = round_half_up(h * 60.0);
    if h < 0.0 {
        h += 360.0;
    }

    let l = (max + min) / 2.0;
    let s = if diff == 0.0 {
        0.0
    } else {
        diff / (1.0 - (2.0 * l - 1.0).abs())
    };

    Some(Color::hsl(h, round_half_up(s * 100.0), round_half_up(l * 100.0)))
}

/// Read the three channel pairs of a `#rrggbb` string.
///
/// No pattern check: the caller validates. Returns `None` when a pair is
/// missing or not hexadecimal.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let r = u8::from_str_radix(hex.get(1..3)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(3..5)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(5..7)?, 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Convert 8-bit RGB to HSL without rounding.
///
/// Achromatic input (r = g = b) has hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Color {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let l = r.max(g).max(b);
    let s = l - r.min(g).min(b);
    let h = if s == 0.0 {
        0.0
    } else if l == r {
        (g - b) / s
    } else if l == g {
        2.0 + (b - r) / s
    } else {
        4.0 + (r - g) / s
    };

    let saturation = if s == 0.0 {
        0.0
    } else if l <= 0.5 {
        s / (2.0 * l - s)
    } else {
        s / (2.0 - (2.0 * l - s))
    };

    Color {
        h: if 60.0 * h < 0.0 { 60.0 * h + 360.0 } else { 60.0 * h },
        s: 100.0 * saturation,
        l: (100.0 * (2.0 * l - s)) / 2.0,
    }
}

// ─── ColorInput normalization ────────────────────────────────────────────────

/// Normalize a [`ColorInput`], reporting why it failed.
///
/// # Errors
///
/// - [`ColorError::InvalidRgb`] for an `rgb…` string without three integers
/// - [`ColorError::InvalidHex`] for a `#…` string that is not `#RGB`/`#RRGGBB`
/// - [`ColorError::NegativeComponent`] for an HSL value with a negative (or
///   NaN) component
/// - [`ColorError::Unrecognized`] for any other string
pub fn try_color_to_hsl(input: &ColorInput) -> Result<Color, ColorError> {
    match input {
        ColorInput::Text(text) if text.starts_with("rgb") => parse_rgb_function(text)
            .map(|rgb| rgb_to_hsl(rgb.r, rgb.g, rgb.b))
            .ok_or_else(|| ColorError::InvalidRgb(text.clone())),
        ColorInput::Text(text) if text.starts_with('#') => {
            hex_to_hsl(text).ok_or_else(|| ColorError::InvalidHex(text.clone()))
        }
        ColorInput::Text(text) => Err(ColorError::Unrecognized(text.clone())),
        ColorInput::Hsl(color) => {
            if color.h >= 0.0 && color.s >= 0.0 && color.l >= 0.0 {
                Ok(*color)
            } else {
                Err(ColorError::NegativeComponent)
            }
        }
    }
}

/// Normalize a [`ColorInput`] to HSL, falling back to [`Color::ZERO`].
///
/// Invalid input is not an error at this boundary: it silently becomes
/// black (logged at debug level).
#[must_use]
pub fn color_to_hsl(input: &ColorInput) -> Color {
    try_color_to_hsl(input).unwrap_or_else(|err| {
        tracing::debug!(%err, "color input normalized to fallback black");
        Color::ZERO
    })
}

/// Parse `rgb(r, g, b)`: spaces removed, wrapper stripped, comma-split, and
/// each channel read as a leading integer clamped to 0–255.
fn parse_rgb_function(text: &str) -> Option<Rgb> {
    let compact: String = text.chars().filter(|c| *c != ' ').collect();
    let inner = compact
        .replacen("rgb", "", 1)
        .replacen('(', "", 1)
        .replacen(')', "", 1);

    let mut channels = inner.split(',').map(parse_leading_int);
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    Some(Rgb::new(clamp_u8(r), clamp_u8(g), clamp_u8(b)))
}

/// Read an optionally signed run of leading digits (`"12.5"` → 12).
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    rest[..end].parse::<i64>().ok().map(|v| sign * v)
}

fn clamp_u8(v: i64) -> u8 {
    u8::try_from(v.clamp(0, 255)).unwrap_or(u8::MAX)
}

// ─── Color space strings ─────────────────────────────────────────────────────

/// `"H.HH S.SS% L.LL%"` — the channel list for `hsl(var(--token))`.
#[must_use]
pub fn hsl_color_space(color: Color) -> String {
    format!(
        "{} {}% {}%",
        to_fixed2(color.h),
        to_fixed2(color.s),
        to_fixed2(color.l)
    )
}

/// `"r, g, b"` with each channel normalized to [0, 1] — the channel list for
/// `color(<gamut> var(--token))`.
#[must_use]
pub fn rgb_color_space(color: Color) -> String {
    let Rgb { r, g, b } = color.to_rgb();
    format!(
        "{}, {}, {}",
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0
    )
}

/// Format a color's channel list for the requested output space.
///
/// No gamut means HSL components; any gamut means normalized RGB floats.
#[must_use]
pub fn color_space(color: Color, gamut: Option<&Gamut>) -> String {
    match gamut {
        None => hsl_color_space(color),
        Some(_) => rgb_color_space(color),
    }
}

// ─── Numeric helpers ─────────────────────────────────────────────────────────

/// Round to the nearest integer, halves toward +∞.
#[inline]
fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round a 0–255 float to a channel byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    round_half_up(v).clamp(0.0, 255.0) as u8
}

/// Two-decimal fixed formatting. Exact ties round away from zero and
/// negative zero prints as `0.00`.
fn to_fixed2(v: f64) -> String {
    if v == 0.0 {
        return "0.00".to_owned();
    }
    let magnitude = v.abs();
    // 60 places is enough to show whether the exact binary value sits on a tie.
    let exact = format!("{magnitude:.60}");
    let text = match exact.split_once('.') {
        Some((whole, fraction)) if is_third_place_tie(fraction) => {
            round_up_last_digit(&format!("{whole}.{}", &fraction[..2]))
        }
        _ => format!("{magnitude:.2}"),
    };
    if v < 0.0 { format!("-{text}") } else { text }
}

fn is_third_place_tie(fraction: &str) -> bool {
    fraction.len() > 3
        && fraction.as_bytes()[2] == b'5'
        && fraction[3..].bytes().all(|b| b == b'0')
}

/// Add one unit in the last place of a plain decimal string.
fn round_up_last_digit(text: &str) -> String {
    let mut digits = text.as_bytes().to_vec();
    let mut carry = true;
    for d in digits.iter_mut().rev() {
        match *d {
            b'.' => {}
            b'9' => *d = b'0',
            _ => {
                *d += 1;
                carry = false;
                break;
            }
        }
    }
    let digits = digits.into_iter().map(char::from);
    if carry {
        std::iter::once('1').chain(digits).collect()
    } else {
        digits.collect()
    }
}

#[inline]
fn parse_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    Some(parse_hex_digit(hi)? << 4 | parse_hex_digit(lo)?)
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
