// SPDX-License-Identifier: MIT
//
// tinct-color — HSL color math for the tinct token generator.
//
// Everything downstream (ranges, harmonies, tokens) works on a single
// canonical representation: `Color { h, s, l }` with hue in degrees and
// saturation/lightness in percent. This crate owns the conversions in and
// out of that space and the WCAG contrast math used to pick text colors.
//
// Conversion pipeline:
//
//   "#rgb" / "#rrggbb" / "rgb(r,g,b)" / {h,s,l}
//       │  color_to_hsl (fallback: black)
//       ▼
//   Color (HSL) ──► hsl_to_rgb ──► Rgb ──► color_space (gamut floats)
//       │
//       └──► hsl_to_hex ──► contrast ──► text_color
//
// Numeric results are compared exactly against reference fixtures, so the
// arithmetic order of each formula is kept as written.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Exact float comparisons are part of the HSL branch conditions.
#![allow(clippy::float_cmp)]
// Fused multiply-add would perturb results in the last bit.
#![allow(clippy::suboptimal_flops)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod contrast;
pub mod error;

pub use color::{Color, ColorInput, Gamut, Rgb};
pub use error::ColorError;
