//! # tinct-theme — design-token palettes from seed colors
//!
//! Turns a handful of seed colors into a stylesheet of CSS custom
//! properties: an 11-step light ramp and an 11-step dark ramp per family,
//! each step paired with a readable text color, plus class and attribute
//! utility rules.
//!
//! # Architecture
//!
//! ```text
//! PaletteConfig / ColorConfiguration     (sample.rs may supply the seed)
//!     │
//!     ▼
//! harmony.rs:    fan a name list out into one family per name
//!     │
//!     ▼
//! variant.rs:    seed → light/dark Range bands
//!     │
//!     ▼
//! range.rs:      bands → ordered colors (curve interpolation)
//!     │
//!     ▼
//! token.rs:      color → --name-token / --name declarations
//!     │
//!     ▼
//! palette.rs:    accumulate tokens and utility rules
//!     │
//!     ▼
//! stylesheet.rs: serialize compact CSS
//! ```
//!
//! # Example
//!
//! ```
//! use tinct_theme::{ColorConfiguration, PaletteBuilder};
//!
//! let mut builder = PaletteBuilder::new();
//! builder.set_colors(&[ColorConfiguration::new("#3b82f6").with_name("brand")]);
//! let css = builder.stylesheet();
//! assert!(css.starts_with(":root{--brand-0-token:"));
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Ramp indices and bucket counts are small integers cast to f64.
#![allow(clippy::cast_precision_loss)]
// Exact float comparisons pin numeric fixtures.
#![allow(clippy::float_cmp)]
// Curve evaluation keeps its written operation order.
#![allow(clippy::suboptimal_flops)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]

pub mod config;
pub mod error;
pub mod harmony;
pub mod palette;
pub mod range;
pub mod sample;
pub mod stylesheet;
pub mod token;
pub mod variant;

pub use config::{ColorConfiguration, PaletteConfig, SelectorKinds, SelectorOptions, TokenName};
pub use error::ThemeError;
pub use harmony::Harmony;
pub use palette::PaletteBuilder;
pub use range::{CurveParams, Range};
pub use sample::SampleOptions;
