// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Why a color input could not be normalized to HSL.
///
/// The public conversion functions never surface this: they degrade to
/// [`Color::ZERO`](crate::Color::ZERO). Use
/// [`try_color_to_hsl`](crate::color::try_color_to_hsl) to observe it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color `{0}` (expected #RGB or #RRGGBB)")]
    InvalidHex(String),

    #[error("invalid rgb() color `{0}`")]
    InvalidRgb(String),

    #[error("HSL components must be non-negative")]
    NegativeComponent,

    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
}
