// SPDX-License-Identifier: MIT
//
// tinct — generate CSS design-token palettes from seed colors.
//
// This is the binary front end over the two library crates:
//
//   tinct-color → HSL/RGB/hex conversion, WCAG contrast
//   tinct-theme → harmonies, ramps, tokens, stylesheet, image sampling
//
// Subcommands:
//
//   build    <CONFIG>          stylesheet from a TOML/JSON config file
//   color    <COLOR> [opts]    stylesheet for one family from the command line
//   sample   <IMAGE>           dominant color of an image
//   contrast <HEX_A> <HEX_B>   WCAG contrast ratio
//
// Stylesheets go to stdout unless -o is given. Logs go to stderr and are
// filtered by RUST_LOG (default `tinct=info`, `-v` for debug).

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tinct_color::{
    Color, ColorInput,
    color::try_color_to_hsl,
    contrast::{ENHANCED_RATIO, MINIMUM_RATIO, contrast_ratio_hex},
};
use tinct_theme::{
    ColorConfiguration, Harmony, PaletteBuilder, PaletteConfig, SampleOptions, SelectorOptions,
    TokenName, sample::sample_image,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "tinct")]
#[command(about = "Generate CSS design-token palettes from seed colors")]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a stylesheet from a config file (.json, otherwise TOML)
    Build {
        /// Path to the palette config
        config: PathBuf,

        /// Write the stylesheet here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a stylesheet for a single seed color
    Color(ColorArgs),

    /// Print the dominant color of an image
    Sample {
        image: PathBuf,

        /// Sample every Nth pixel
        #[arg(long, default_value_t = 10)]
        quality: usize,
    },

    /// Print the WCAG contrast ratio of two #rrggbb colors
    Contrast { a: String, b: String },
}

#[derive(Debug, Args)]
struct ColorArgs {
    /// Seed color: #rgb, #rrggbb or rgb(r, g, b)
    color: String,

    /// Token name; repeat to fan out through a harmony
    #[arg(short, long = "name")]
    names: Vec<String>,

    /// Hue pattern for multiple names
    #[arg(long, value_parser = parse_harmony)]
    harmony: Option<Harmony>,

    /// Emit color(<GAMUT> ...) tokens, e.g. display-p3
    #[arg(long)]
    gamut: Option<String>,

    #[arg(long, default_value = "")]
    prefix: String,

    #[arg(long, default_value = "")]
    suffix: String,

    /// Selector the tokens are declared on
    #[arg(long, default_value = ":root")]
    target: String,

    /// Skip the dark scheme
    #[arg(long)]
    no_dark: bool,

    /// Skip text-color tokens
    #[arg(long)]
    no_font: bool,

    /// Skip [name] utility rules
    #[arg(long)]
    no_attributes: bool,

    /// Skip .name utility rules
    #[arg(long)]
    no_classes: bool,

    /// Replace the seed with the dominant color of this image
    #[arg(long)]
    image: Option<PathBuf>,

    /// Write the stylesheet here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_harmony(name: &str) -> Result<Harmony, String> {
    Harmony::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Harmony::all().iter().map(|h| h.name()).collect();
        format!("unknown harmony `{name}` (expected one of: {})", known.join(", "))
    })
}

impl ColorArgs {
    fn configuration(&self, seed: ColorInput) -> ColorConfiguration {
        let name = match self.names.as_slice() {
            [] => TokenName::default(),
            [single] => TokenName::Single(single.clone()),
            many => TokenName::Many(many.to_vec()),
        };

        let mut configuration = ColorConfiguration::new(seed)
            .with_name(name)
            .with_prefix(self.prefix.as_str())
            .with_suffix(self.suffix.as_str())
            .with_dark(!self.no_dark)
            .with_font(!self.no_font)
            .with_selector(SelectorOptions {
                attribute: !self.no_attributes,
                class: !self.no_classes,
            });
        if let Some(harmony) = self.harmony {
            configuration = configuration.with_harmony(harmony);
        }
        if let Some(gamut) = &self.gamut {
            configuration = configuration.with_gamut(gamut.as_str());
        }
        configuration
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build { config, output } => {
            let config = PaletteConfig::from_path(&config)
                .with_context(|| format!("failed to load config {}", config.display()))?;
            let css = build(&config.target, &config.colors);
            emit(&css, output.as_deref())
        }
        Command::Color(args) => {
            let seed = match &args.image {
                Some(image) => ColorInput::Hsl(sample(image, &SampleOptions::default())?),
                None => ColorInput::Hsl(
                    try_color_to_hsl(&ColorInput::from(args.color.as_str()))
                        .context("invalid seed color")?,
                ),
            };
            let css = build(&args.target, &[args.configuration(seed)]);
            emit(&css, args.output.as_deref())
        }
        Command::Sample { image, quality } => {
            let options = SampleOptions {
                quality,
                ..SampleOptions::default()
            };
            let color = sample(&image, &options)?;
            println!("{color} {}", color.to_hex());
            Ok(())
        }
        Command::Contrast { a, b } => {
            let Some(ratio) = contrast_ratio_hex(&a, &b) else {
                bail!("expected two #rrggbb colors, got `{a}` and `{b}`");
            };
            let grade = if ratio > ENHANCED_RATIO {
                "enhanced"
            } else if ratio > MINIMUM_RATIO {
                "minimum"
            } else {
                "insufficient"
            };
            println!("{ratio:.2}:1 ({grade})");
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tinct=debug" } else { "tinct=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn build(target: &str, colors: &[ColorConfiguration]) -> String {
    let mut builder = PaletteBuilder::new();
    builder.set_target(target);
    builder.set_colors(colors);
    let css = builder.stylesheet();
    tracing::info!(families = colors.len(), bytes = css.len(), "built stylesheet");
    css
}

fn sample(image: &Path, options: &SampleOptions) -> Result<Color> {
    let color = sample_image(image, options)
        .with_context(|| format!("failed to sample {}", image.display()))?;
    if color == Color::ZERO {
        tracing::warn!(image = %image.display(), "no pixel within sampling limits, using black");
    }
    Ok(color)
}

fn emit(css: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, css).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote stylesheet");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(css.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    fn color_args(argv: &[&str]) -> ColorArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Color(args) => args,
            other => panic!("expected color command, got {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn color_defaults() {
        let args = color_args(&["tinct", "color", "#336699"]);
        let config = args.configuration(ColorInput::from("#336699"));
        assert_eq!(config.name, TokenName::default());
        assert!(config.dark && config.font);
        assert_eq!(config.selector, SelectorOptions::default());
        assert_eq!(args.target, ":root");
    }

    #[test]
    fn repeated_names_fan_out() {
        let args = color_args(&[
            "tinct", "color", "#336699", "-n", "a", "-n", "b", "--harmony", "triadic",
        ]);
        let config = args.configuration(ColorInput::from("#336699"));
        assert_eq!(config.name, TokenName::from(["a", "b"]));
        assert_eq!(config.harmony, Some(Harmony::Triadic));
    }

    #[test]
    fn negated_flags() {
        let args = color_args(&[
            "tinct",
            "color",
            "#000",
            "--no-dark",
            "--no-font",
            "--no-classes",
            "--gamut",
            "display-p3",
        ]);
        let config = args.configuration(ColorInput::from("#000"));
        assert!(!config.dark);
        assert!(!config.font);
        assert!(config.selector.attribute);
        assert!(!config.selector.class);
        assert_eq!(config.gamut.map(|g| g.to_string()), Some("display-p3".to_owned()));
    }

    #[test]
    fn unknown_harmony_is_rejected() {
        let err =
            Cli::try_parse_from(["tinct", "color", "#000", "--harmony", "golden"]).unwrap_err();
        assert!(err.to_string().contains("unknown harmony"));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["tinct", "contrast", "#000000", "#ffffff", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn build_writes_stylesheet() {
        let css = build(".app", &[ColorConfiguration::new("#336699").with_name("brand")]);
        assert!(css.starts_with(".app{--brand-0-token:"));
    }
}
