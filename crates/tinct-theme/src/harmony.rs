//! Harmony engine — hue rotation for families of related colors.
//!
//! A harmony is a fixed table of hue offsets. Given a list of token names
//! and a base color, each name receives the base color rotated by the
//! offset at its position. Saturation and lightness are untouched.

use serde::{Deserialize, Serialize};
use tinct_color::{Color, ColorInput};

use crate::config::{ColorConfiguration, TokenName};

/// A named hue-offset pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Harmony {
    /// 120-degree spacing (3 colors).
    Triadic,
    /// Base plus the two hues flanking its complement (3 colors).
    Complementary,
    /// The two hues flanking the complement, without the base (2 colors).
    SplitComplementary,
    /// 90-degree spacing (4 colors).
    Tetradic,
    /// Same offsets as `Tetradic`.
    Square,
    /// 30-degree steps around the whole wheel (12 colors).
    Analogous,
}

impl Harmony {
    /// Hue offsets in degrees, applied in name order.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::Complementary => &[0.0, 150.0, 210.0],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Tetradic | Self::Square => &[0.0, 90.0, 180.0, 270.0],
            Self::Analogous => &[
                0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0,
                330.0,
            ],
        }
    }

    /// Name as written in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "splitComplementary",
            Self::Tetradic => "tetradic",
            Self::Square => "square",
            Self::Analogous => "analogous",
        }
    }

    /// Parse a harmony from its name (case-insensitive, `-`/`_` ignored).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        Self::all()
            .iter()
            .find(|h| h.name().to_lowercase() == wanted)
            .copied()
    }

    /// All available harmonies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Triadic,
            Self::Complementary,
            Self::SplitComplementary,
            Self::Tetradic,
            Self::Square,
            Self::Analogous,
        ]
    }
}

/// Offsets for `count` names: the harmony table when it is long enough,
/// otherwise `i * 360 / count`.
fn cursor(count: usize, harmony: Option<Harmony>) -> Vec<f64> {
    if let Some(harmony) = harmony {
        let table = harmony.offsets();
        if count <= table.len() {
            return table[..count].to_vec();
        }
        tracing::warn!(
            harmony = harmony.name(),
            names = count,
            available = table.len(),
            "more names than harmony offsets, spacing hues evenly instead"
        );
    }
    (0..count)
        .map(|i| (i as f64 * 360.0) / count as f64)
        .collect()
}

/// Fan a multi-name configuration out into one configuration per name.
///
/// Each output copies `configuration`, takes `name[i]` as its single name,
/// and uses `color` with hue `(color.h + offset[i]) % 360` as its seed.
///
/// A single name produces nothing: only a name list fans out.
#[must_use]
pub fn expand(
    name: &TokenName,
    harmony: Option<Harmony>,
    color: Color,
    configuration: &ColorConfiguration,
) -> Vec<ColorConfiguration> {
    let TokenName::Many(names) = name else {
        return Vec::new();
    };

    names
        .iter()
        .zip(cursor(names.len(), harmony))
        .map(|(name, offset)| ColorConfiguration {
            name: TokenName::Single(name.clone()),
            color: ColorInput::Hsl(color.rotate_hue(offset)),
            ..configuration.clone()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
