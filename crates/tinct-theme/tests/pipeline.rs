//! Config file → stylesheet, end to end.

use pretty_assertions::assert_eq;
use tinct_theme::{PaletteBuilder, PaletteConfig};

fn build(config: &PaletteConfig) -> String {
    let mut builder = PaletteBuilder::new();
    builder.set_target(config.target.clone());
    builder.set_colors(&config.colors);
    builder.stylesheet()
}

#[test]
fn toml_config_to_stylesheet() {
    let config = PaletteConfig::from_toml_str(
        r##"
        target = ".app"

        [[colors]]
        color = "#336699"
        name = "brand"
        font = false
        selector = { attribute = false, class = false }
        "##,
    )
    .unwrap();

    let css = build(&config);
    assert!(css.starts_with(".app{--brand-0-token:"));
    assert!(css.contains("@media (prefers-color-scheme: dark){.app{"));
    assert!(css.contains("--brand-100:hsl(var(--brand-100-token))"));
    assert!(!css.contains("brand-110"));
    assert!(!css.contains("background-color"));
}

#[test]
fn harmony_families_share_one_stylesheet() {
    let config = PaletteConfig::from_json_str(
        r#"{
            "colors": [
                {
                    "color": { "h": 10, "s": 60, "l": 50 },
                    "name": ["warm", "cool"],
                    "harmony": "complementary",
                    "dark": false
                }
            ]
        }"#,
    )
    .unwrap();

    let css = build(&config);
    assert!(css.contains("--warm-50-token:10.00 60.00% 50.00%"));
    assert!(css.contains("--cool-50-token:160.00 60.00% 50.00%"));
    assert!(css.contains(".cool-font-100{color:var(--cool-font-100)}"));
    assert!(css.contains("[warm-0]{background-color:var(--warm-0)}"));
    assert!(!css.contains("@media"));
}

#[test]
fn gamut_families() {
    let config = PaletteConfig::from_toml_str(
        r#"
        [[colors]]
        color = "rgb(255, 0, 0)"
        name = "alert"
        gamut = "display-p3"
        dark = false
        font = false
        "#,
    )
    .unwrap();

    let css = build(&config);
    assert!(css.contains("--alert-50-token:1, 0, 0;"));
    assert!(css.contains("--alert-50:color(display-p3 var(--alert-50-token))"));
}

#[test]
fn repeated_builds_are_identical() {
    let config = PaletteConfig::from_toml_str(
        r##"
        [[colors]]
        color = "#3b82f6"
        "##,
    )
    .unwrap();

    assert_eq!(build(&config), build(&config));
}
