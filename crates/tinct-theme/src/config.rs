//! Color configurations and palette config files.
//!
//! A [`ColorConfiguration`] describes one token family: the seed color, how
//! its tokens are named, which variants and selectors to emit, and an
//! optional harmony for multi-name fan-out. Every field except `color` has a
//! default, so a config file can be as small as:
//!
//! ```toml
//! [[colors]]
//! color = "#3b82f6"
//! ```
//!
//! Files are read as JSON when the extension is `.json` and as TOML
//! otherwise.

use std::path::Path;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tinct_color::{Color, ColorInput, Gamut};

use crate::error::{Result, ThemeError};
use crate::harmony::Harmony;
use crate::variant::{self, VariantFn};

// ---------------------------------------------------------------------------
// Token names
// ---------------------------------------------------------------------------

/// A token base name, or a list of names to fan out through a harmony.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenName {
    Single(String),
    Many(Vec<String>),
}

impl Default for TokenName {
    fn default() -> Self {
        Self::Single("primary".to_owned())
    }
}

impl From<&str> for TokenName {
    fn from(name: &str) -> Self {
        Self::Single(name.to_owned())
    }
}

impl From<Vec<String>> for TokenName {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl<const N: usize> From<[&str; N]> for TokenName {
    fn from(names: [&str; N]) -> Self {
        Self::Many(names.iter().map(|n| (*n).to_owned()).collect())
    }
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

bitflags! {
    /// Which utility rules to emit for each token family.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SelectorKinds: u8 {
        /// `[name-N]{background-color:var(--name-N-token)}`
        const ATTRIBUTE = 1 << 0;
        /// `.name-N{background-color:var(--name-N-token)}`
        const CLASS     = 1 << 1;
    }
}

/// Serialized form of [`SelectorKinds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOptions {
    #[serde(default = "default_true")]
    pub attribute: bool,
    #[serde(default = "default_true")]
    pub class: bool,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            attribute: true,
            class: true,
        }
    }
}

impl SelectorOptions {
    #[must_use]
    pub fn kinds(self) -> SelectorKinds {
        let mut kinds = SelectorKinds::empty();
        kinds.set(SelectorKinds::ATTRIBUTE, self.attribute);
        kinds.set(SelectorKinds::CLASS, self.class);
        kinds
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// The pair of range builders that turn a seed into light and dark ramps.
///
/// Not serializable; configurations loaded from files always get the
/// built-in [`variant::light`] and [`variant::dark`].
#[derive(Debug, Clone, Copy)]
pub struct ThemeVariants {
    pub darken: VariantFn,
    pub lighten: VariantFn,
}

impl Default for ThemeVariants {
    fn default() -> Self {
        Self {
            darken: variant::dark,
            lighten: variant::light,
        }
    }
}

// ---------------------------------------------------------------------------
// ColorConfiguration
// ---------------------------------------------------------------------------

/// One token family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfiguration {
    /// Seed color: hex, `rgb(...)`, or `{ h, s, l }`.
    pub color: ColorInput,

    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub name: TokenName,

    #[serde(default)]
    pub suffix: String,

    /// Emit the dark ramp inside a `prefers-color-scheme: dark` block.
    #[serde(default = "default_true")]
    pub dark: bool,

    /// Emit a readable text-color token per step.
    #[serde(default = "default_true")]
    pub font: bool,

    #[serde(default)]
    pub selector: SelectorOptions,

    #[serde(skip)]
    pub theme: ThemeVariants,

    /// Wrap tokens in `color(<gamut> ...)` instead of `hsl(...)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamut: Option<Gamut>,

    /// Hue offsets for a `Many` name list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harmony: Option<Harmony>,
}

impl ColorConfiguration {
    /// A configuration with every field at its default.
    #[must_use]
    pub fn new(color: impl Into<ColorInput>) -> Self {
        Self {
            color: color.into(),
            prefix: String::new(),
            name: TokenName::default(),
            suffix: String::new(),
            dark: true,
            font: true,
            selector: SelectorOptions::default(),
            theme: ThemeVariants::default(),
            gamut: None,
            harmony: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<TokenName>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_harmony(mut self, harmony: Harmony) -> Self {
        self.harmony = Some(harmony);
        self
    }

    #[must_use]
    pub fn with_gamut(mut self, gamut: impl Into<Gamut>) -> Self {
        self.gamut = Some(gamut.into());
        self
    }

    #[must_use]
    pub const fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    #[must_use]
    pub const fn with_font(mut self, font: bool) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub const fn with_selector(mut self, selector: SelectorOptions) -> Self {
        self.selector = selector;
        self
    }

    #[must_use]
    pub const fn with_variants(mut self, theme: ThemeVariants) -> Self {
        self.theme = theme;
        self
    }
}

impl From<Color> for ColorConfiguration {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

// ---------------------------------------------------------------------------
// PaletteConfig (file format)
// ---------------------------------------------------------------------------

/// Top-level config file: an optional target selector and the families.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default)]
    pub colors: Vec<ColorConfiguration>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            colors: Vec::new(),
        }
    }
}

impl PaletteConfig {
    /// Load from disk, choosing the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            families = config.colors.len(),
            "loaded palette config"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

fn default_true() -> bool {
    true
}

fn default_target() -> String {
    ":root".to_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
