//! Shell configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a `config.toml` next to `pages.json` overrides any subset
//! of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! lang = "en"                  # <html lang>
//! background = "layer-1"       # <html data-background>
//! contents_label = "Contents"  # Heading above the on-page table of contents
//!
//! [search]
//! action = "/search"           # Where the search box submits
//! placeholder = "Search"
//!
//! [layout]
//! page_max_width = "1600px"    # Whole page row (nav + main)
//! main_max_width = "1280px"    # Main card (article + contents sidebar)
//! article_max_width = "768px"  # Prose column
//! gap = "32px"                 # Space between nav and main
//!
//! [colors.light]
//! background = "#f8f8f8"
//! surface = "#ffffff"
//! text = "#222222"
//! text_muted = "#6e6e6e"
//! border = "#e1e1e1"
//! link = "#2680eb"
//!
//! [colors.dark]
//! background = "#1d1d1d"
//! surface = "#252525"
//! text = "#eeeeee"
//! text_muted = "#a2a2a2"
//! border = "#3e3e3e"
//! link = "#5aa9fa"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Shell configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document language, written to `<html lang>`.
    pub lang: String,
    /// Background layer name, written to `<html data-background>`.
    pub background: String,
    /// Label shown above the on-page table of contents.
    pub contents_label: String,
    /// Search box settings.
    pub search: SearchConfig,
    /// Widths and spacing of the page skeleton.
    pub layout: LayoutConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            background: "layer-1".to_string(),
            contents_label: "Contents".to_string(),
            search: SearchConfig::default(),
            layout: LayoutConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable in the rendered document.
    ///
    /// Layout and color values are written into the inline stylesheet, so
    /// each must be a single CSS value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        let layout = [
            ("layout.page_max_width", &self.layout.page_max_width),
            ("layout.main_max_width", &self.layout.main_max_width),
            ("layout.article_max_width", &self.layout.article_max_width),
            ("layout.gap", &self.layout.gap),
        ];
        for (key, value) in layout {
            check_css_value(key, value)?;
        }
        for (scheme, colors) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            for (field, value) in colors.fields() {
                check_css_value(&format!("colors.{scheme}.{field}"), value)?;
            }
        }
        Ok(())
    }
}

fn check_css_value(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    if value.contains([';', '{', '}', '<']) {
        return Err(ConfigError::Validation(format!(
            "{key} must be a single CSS value, got {value:?}"
        )));
    }
    Ok(())
}

/// Search box settings. The box only submits a query; searching is done
/// elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Form action the query is submitted to.
    pub action: String,
    /// Placeholder text of the search input.
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            action: "/search".to_string(),
            placeholder: "Search".to_string(),
        }
    }
}

/// Page skeleton sizes (CSS values).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub page_max_width: String,
    pub main_max_width: String,
    pub article_max_width: String,
    pub gap: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_max_width: "1600px".to_string(),
            main_max_width: "1280px".to_string(),
            article_max_width: "768px".to_string(),
            gap: "32px".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background behind the main card.
    pub background: String,
    /// Main card background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (sidebar labels, descriptions).
    pub text_muted: String,
    pub border: String,
    pub link: String,
}

impl ColorScheme {
    /// Every field with its config key, in declaration order.
    fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
            ("text_muted", &self.text_muted),
            ("border", &self.border),
            ("link", &self.link),
        ]
    }

    pub fn default_light() -> Self {
        Self {
            background: "#f8f8f8".to_string(),
            surface: "#ffffff".to_string(),
            text: "#222222".to_string(),
            text_muted: "#6e6e6e".to_string(),
            border: "#e1e1e1".to_string(),
            link: "#2680eb".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1d1d1d".to_string(),
            surface: "#252525".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#a2a2a2".to_string(),
            border: "#3e3e3e".to_string(),
            link: "#5aa9fa".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docs-shell Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to pages.json in the source directory.
# Unknown keys will cause an error.

# Document language (<html lang>).
lang = "en"

# Background layer name (<html data-background>).
background = "layer-1"

# Heading shown above the on-page table of contents.
contents_label = "Contents"

# ---------------------------------------------------------------------------
# Search box (submits a query; searching itself happens elsewhere)
# ---------------------------------------------------------------------------
[search]
action = "/search"
placeholder = "Search"

# ---------------------------------------------------------------------------
# Page skeleton sizes (any single CSS value)
# ---------------------------------------------------------------------------
[layout]
page_max_width = "1600px"
main_max_width = "1280px"
article_max_width = "768px"
gap = "32px"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f8f8f8"
surface = "#ffffff"
text = "#222222"
text_muted = "#6e6e6e"    # Sidebar labels, page descriptions
border = "#e1e1e1"
link = "#2680eb"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#1d1d1d"
surface = "#252525"
text = "#eeeeee"
text_muted = "#a2a2a2"
border = "#3e3e3e"
link = "#5aa9fa"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
    )
}

/// Generate CSS custom properties from layout config.
pub fn generate_layout_css(layout: &LayoutConfig) -> String {
    format!(
        r#":root {{
    --page-max-width: {page};
    --main-max-width: {main};
    --article-max-width: {article};
    --page-gap: {gap};
}}"#,
        page = layout.page_max_width,
        main = layout.main_max_width,
        article = layout.article_max_width,
        gap = layout.gap,
    )
}
