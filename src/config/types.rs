//! Configuration type definitions and defaults

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::color::{ColorSource, Theme};
use crate::error::ConfigError;
use crate::stipple::PatternSpec;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub color: ColorConfig,
    /// Depth-based coloring (none by default)
    #[serde(default)]
    pub color_by_depth: Option<DepthPaletteConfig>,
    /// Current-depth highlighting (none by default)
    #[serde(default)]
    pub highlight: Option<HighlightConfig>,
    #[serde(default)]
    pub pattern: PatternConfig,
    /// Colors used when no host theme is available
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Validate every section.
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()?;
        self.color.validate()?;
        if let Some(depth) = &self.color_by_depth {
            depth.validate()?;
        }
        let base = self.pattern.to_spec()?;
        if let Some(highlight) = &self.highlight {
            highlight.validate()?;
            highlight.pattern_spec(&base)?;
        }
        Theme::from_config(&self.theme)?;
        Ok(())
    }
}

/// Layout and rendering mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Indentation width in columns
    #[serde(default = "default_spacing")]
    pub spacing: usize,
    /// Tab stop interval in columns
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    /// Continue bars across blank lines
    #[serde(default = "default_blank_lines")]
    pub blank_lines: bool,
    /// Draw bars with `bar_char` instead of stipple bitmaps
    #[serde(default)]
    pub prefer_character: bool,
    /// Glyph used in character mode and in blank-line padding
    #[serde(default = "default_bar_char")]
    pub bar_char: char,
}

pub fn default_spacing() -> usize {
    4
}

pub fn default_tab_width() -> usize {
    8
}

pub fn default_blank_lines() -> bool {
    true
}

pub fn default_bar_char() -> char {
    '│'
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            tab_width: default_tab_width(),
            blank_lines: default_blank_lines(),
            prefer_character: false,
            bar_char: default_bar_char(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spacing == 0 {
            return Err(ConfigError::NotPositive {
                field: "display.spacing",
            });
        }
        if self.tab_width == 0 {
            return Err(ConfigError::NotPositive {
                field: "display.tab_width",
            });
        }
        Ok(())
    }
}

/// Main bar color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_main_color")]
    pub main: ColorSource,
    /// Take a face's background instead of its foreground
    #[serde(default)]
    pub face_bg: bool,
    /// Blend factor into the frame background (1 = main color only)
    #[serde(default = "default_color_blend")]
    pub blend: Option<f64>,
}

pub fn default_main_color() -> ColorSource {
    ColorSource::face("default")
}

pub fn default_color_blend() -> Option<f64> {
    Some(0.4)
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            main: default_main_color(),
            face_bg: false,
            blend: default_color_blend(),
        }
    }
}

impl ColorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.main.validate()?;
        check_blend("color.blend", self.blend)
    }
}

/// Where the depth palette's colors come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepthPaletteSource {
    /// Host faces whose names match; capture group 1 holds the sort number
    Regexp { regexp: String },
    /// Explicit colors, in order
    Palette { palette: Vec<ColorSource> },
}

/// Depth-based coloring
///
/// ```toml
/// [color_by_depth]
/// palette = ["#d75f5f", "#5fafd7", { face = "outline-3" }]
/// blend = 0.8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthPaletteConfig {
    #[serde(flatten)]
    pub source: DepthPaletteSource,
    #[serde(default)]
    pub face_bg: bool,
    /// Blend each palette color into the main color before use
    #[serde(default)]
    pub blend: Option<f64>,
}

impl DepthPaletteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_blend("color_by_depth.blend", self.blend)?;
        match &self.source {
            DepthPaletteSource::Regexp { regexp } => {
                Regex::new(regexp).map_err(|e| ConfigError::InvalidRegexp {
                    pattern: regexp.clone(),
                    message: e.to_string(),
                })?;
            }
            DepthPaletteSource::Palette { palette } => {
                for source in palette {
                    source.validate()?;
                }
            }
        }
        Ok(())
    }
}

/// Overrides for bars at the current depth
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default)]
    pub color: Option<ColorSource>,
    #[serde(default)]
    pub face_bg: bool,
    /// Background drawn behind the highlighted bar
    #[serde(default)]
    pub background: Option<ColorSource>,
    /// Blend the highlight color into the depth palette or main color
    #[serde(default)]
    pub blend: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub pad: Option<f64>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub zigzag: Option<f64>,
}

impl HighlightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(color) = &self.color {
            color.validate()?;
        }
        if let Some(background) = &self.background {
            background.validate()?;
        }
        check_blend("highlight.blend", self.blend)
    }

    /// Pattern for highlighted bars, or `None` when no shape override is set
    /// and highlighted bars share the regular stipple.
    pub fn pattern_spec(&self, base: &PatternSpec) -> Result<Option<PatternSpec>, ConfigError> {
        if self.width.is_none()
            && self.pad.is_none()
            && self.pattern.is_none()
            && self.zigzag.is_none()
        {
            return Ok(None);
        }
        PatternSpec::new(
            self.width.unwrap_or(base.width_frac()),
            self.pad.unwrap_or(base.pad_frac()),
            self.pattern.as_deref().unwrap_or(base.pattern()),
            self.zigzag.or(base.zigzag()),
        )
        .map(Some)
    }
}

/// Bar shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Bar width as a fraction of the cell width
    #[serde(default = "default_pattern_width")]
    pub width: f64,
    /// Offset from the cell's left edge as a fraction of the cell width
    #[serde(default = "default_pattern_pad")]
    pub pad: f64,
    /// Vertical fill pattern: ' ' blank, anything else filled
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Alternating horizontal offset between different fill characters
    #[serde(default)]
    pub zigzag: Option<f64>,
}

pub fn default_pattern_width() -> f64 {
    0.4
}

pub fn default_pattern_pad() -> f64 {
    0.1
}

pub fn default_pattern() -> String {
    " . . . . .".to_string()
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            width: default_pattern_width(),
            pad: default_pattern_pad(),
            pattern: default_pattern(),
            zigzag: None,
        }
    }
}

impl PatternConfig {
    pub fn to_spec(&self) -> Result<PatternSpec, ConfigError> {
        PatternSpec::new(self.width, self.pad, self.pattern.as_str(), self.zigzag)
    }
}

/// Standalone theme: frame colors plus named faces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default)]
    pub faces: BTreeMap<String, FaceConfig>,
}

pub fn default_foreground() -> String {
    "#d4d4d4".to_string()
}

pub fn default_background() -> String {
    "#1e1e1e".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            background: default_background(),
            faces: BTreeMap::new(),
        }
    }
}

/// Colors of one face in the standalone theme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceConfig {
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
}

fn check_blend(field: &'static str, blend: Option<f64>) -> Result<(), ConfigError> {
    match blend {
        Some(b) => ConfigError::check_range(field, b, 0.0, 1.0),
        None => Ok(()),
    }
}
