//! Palette orchestrator: configurations in, stylesheet out.
//!
//! [`PaletteBuilder`] accumulates tokens and utility rules across calls to
//! [`set_colors`](PaletteBuilder::set_colors), regenerating the stylesheet
//! from everything accumulated so far at the end of each call. The
//! accumulators are cleared by [`stylesheet`](PaletteBuilder::stylesheet)
//! (or [`reset`](PaletteBuilder::reset)); the last generated text survives
//! until [`clear_styles`](PaletteBuilder::clear_styles).
//!
//! Per family, token names follow the ramp index in steps of ten:
//!
//! ```text
//! <prefix><name>-0<suffix>       … <prefix><name>-100<suffix>        background
//! <prefix><name>-font-0<suffix>  … <prefix><name>-font-100<suffix>   text
//! ```

use tinct_color::{Color, Gamut, color::color_to_hsl, contrast::text_color};

use crate::config::{ColorConfiguration, SelectorKinds, TokenName};
use crate::harmony;
use crate::range::range;
use crate::stylesheet::{Rule, Selector, Stylesheet};
use crate::token::{Declaration, TokenColors, css_token};

/// Accumulated custom properties per scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenScheme {
    pub light: Vec<Declaration>,
    pub dark: Vec<Declaration>,
}

/// Colors for one ramp step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenTheme {
    pub light: Color,
    pub dark: Option<Color>,
    /// Also emit a text-color token.
    pub font: bool,
}

/// Token names for one ramp step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenNames {
    pub background: String,
    pub text: String,
}

impl TokenNames {
    /// Names for step `index` of family `name`.
    #[must_use]
    pub fn step(prefix: &str, name: &str, suffix: &str, index: usize) -> Self {
        let step = index * 10;
        Self {
            background: format!("{prefix}{name}-{step}{suffix}"),
            text: format!("{prefix}{name}-font-{step}{suffix}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    tokens: TokenScheme,
    attributes: Vec<Rule>,
    classes: Vec<Rule>,
    target: String,
    styles: String,
}

impl Default for PaletteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: TokenScheme::default(),
            attributes: Vec::new(),
            classes: Vec::new(),
            target: ":root".to_owned(),
            styles: String::new(),
        }
    }

    /// Generate every family in `configurations` and regenerate the
    /// stylesheet from all accumulated state.
    pub fn set_colors(&mut self, configurations: &[ColorConfiguration]) {
        for configuration in configurations {
            self.add_family(configuration);
        }
        self.assemble();
    }

    fn add_family(&mut self, configuration: &ColorConfiguration) {
        let color = color_to_hsl(&configuration.color);

        let name = match &configuration.name {
            TokenName::Many(_) => {
                let expanded = harmony::expand(
                    &configuration.name,
                    configuration.harmony,
                    color,
                    configuration,
                );
                for family in &expanded {
                    self.add_family(family);
                }
                return;
            }
            TokenName::Single(name) => name,
        };

        let light = range(&(configuration.theme.lighten)(color));
        let dark = range(&(configuration.theme.darken)(color));
        let kinds = configuration.selector.kinds();

        for (i, &light_color) in light.iter().enumerate() {
            let names = TokenNames::step(&configuration.prefix, name, &configuration.suffix, i);
            let theme = TokenTheme {
                light: light_color,
                dark: dark.get(i).copied().filter(|_| configuration.dark),
                font: configuration.font,
            };

            self.set_tokens(&theme, &names, configuration.gamut.as_ref());

            if kinds.contains(SelectorKinds::ATTRIBUTE) {
                self.set_attributes(&names, configuration.font);
            }
            if kinds.contains(SelectorKinds::CLASS) {
                self.set_classes(&names, configuration.font);
            }
        }

        tracing::debug!(
            name = %name,
            %color,
            steps = light.len(),
            dark = configuration.dark,
            font = configuration.font,
            "generated token family"
        );
    }

    /// Append the background token (and text token when `theme.font`) for
    /// one step.
    pub fn set_tokens(&mut self, theme: &TokenTheme, names: &TokenNames, gamut: Option<&Gamut>) {
        self.push_token(
            &names.background,
            &TokenColors {
                light: theme.light,
                dark: theme.dark,
            },
            gamut,
        );

        if theme.font {
            self.push_token(
                &names.text,
                &TokenColors {
                    light: text_color(theme.light),
                    dark: theme.dark.map(text_color),
                },
                gamut,
            );
        }
    }

    fn push_token(&mut self, name: &str, colors: &TokenColors, gamut: Option<&Gamut>) {
        let pair = css_token(name, colors, gamut);
        self.tokens.light.extend(pair.light);
        if let Some(dark) = pair.dark {
            self.tokens.dark.extend(dark);
        }
    }

    /// Append `[name]` utility rules.
    pub fn set_attributes(&mut self, names: &TokenNames, font: bool) {
        self.attributes.push(Rule::binding(
            Selector::attribute(&names.background),
            "background-color",
            &names.background,
        ));
        if font {
            self.attributes.push(Rule::binding(
                Selector::attribute(&names.text),
                "color",
                &names.text,
            ));
        }
    }

    /// Append `.name` utility rules.
    pub fn set_classes(&mut self, names: &TokenNames, font: bool) {
        self.classes.push(Rule::binding(
            Selector::class(&names.background),
            "background-color",
            &names.background,
        ));
        if font {
            self.classes.push(Rule::binding(
                Selector::class(&names.text),
                "color",
                &names.text,
            ));
        }
    }

    /// Selector the scheme tokens are declared on (default `:root`).
    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    fn assemble(&mut self) {
        let target = Selector::parse(&self.target);
        let mut sheet = Stylesheet::new();
        sheet.push_light_scheme(&target, &self.tokens.light);
        sheet.push_dark_scheme(&target, &self.tokens.dark);
        sheet.extend_rules(self.classes.iter().cloned());
        sheet.extend_rules(self.attributes.iter().cloned());
        self.styles = sheet.to_string();

        tracing::debug!(
            target = %self.target,
            light = self.tokens.light.len(),
            dark = self.tokens.dark.len(),
            classes = self.classes.len(),
            attributes = self.attributes.len(),
            bytes = self.styles.len(),
            "assembled stylesheet"
        );
    }

    /// Return the last generated stylesheet and reset the accumulators.
    pub fn stylesheet(&mut self) -> String {
        self.reset();
        self.styles.clone()
    }

    /// Same as [`stylesheet`](Self::stylesheet).
    pub fn build(&mut self) -> String {
        self.stylesheet()
    }

    /// Clear tokens, utility rules, and target. The last generated
    /// stylesheet is kept.
    pub fn reset(&mut self) {
        self.tokens = TokenScheme::default();
        self.attributes.clear();
        self.classes.clear();
        self.target = ":root".to_owned();
    }

    pub fn clear_styles(&mut self) {
        self.styles.clear();
    }

    /// Last generated stylesheet, without resetting anything.
    #[must_use]
    pub fn styles(&self) -> &str {
        &self.styles
    }

    /// Tokens accumulated since the last reset.
    #[must_use]
    pub const fn tokens(&self) -> &TokenScheme {
        &self.tokens
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
