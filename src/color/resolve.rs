//! Resolution of color references against the host's theme.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{named, parse_color, Color};
use crate::config::ThemeConfig;
use crate::error::ConfigError;

/// Where a configured color comes from.
///
/// In TOML either a string (`"#556677"` or `"dim gray"`) or a face reference
/// (`{ face = "shadow" }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSource {
    Face { face: String },
    Value(String),
}

impl ColorSource {
    pub fn face(name: impl Into<String>) -> Self {
        ColorSource::Face { face: name.into() }
    }

    pub fn value(value: impl Into<String>) -> Self {
        ColorSource::Value(value.into())
    }

    /// Hex literals must be well formed; names and faces are only checked
    /// when resolved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            ColorSource::Value(v) if v.trim_start().starts_with('#') => v
                .parse::<Color>()
                .map(|_| ())
                .map_err(|source| ConfigError::InvalidColor {
                    value: v.clone(),
                    source,
                }),
            _ => Ok(()),
        }
    }

    /// Resolve to a concrete color. `face_bg` selects a face's background
    /// instead of its foreground.
    pub fn resolve(&self, resolver: &dyn ColorResolver, face_bg: bool) -> Option<Color> {
        match self {
            ColorSource::Face { face } => resolver.face(face, face_bg),
            ColorSource::Value(v) => {
                let v = v.trim();
                if v.starts_with('#') {
                    v.parse().ok()
                } else {
                    resolver.named(v)
                }
            }
        }
    }
}

/// The host's view of colors: named colors, faces and the frame background.
pub trait ColorResolver {
    /// Look up a color by name.
    fn named(&self, name: &str) -> Option<Color> {
        named::lookup(name)
    }

    /// Foreground (or background, if `background`) of the named face.
    fn face(&self, face: &str, background: bool) -> Option<Color>;

    /// Names of every face known to the host, used by regexp depth palettes.
    fn face_names(&self) -> Vec<String>;

    /// Background color of the frame bars are blended into.
    fn frame_background(&self) -> Color;
}

/// Colors of a single face; either side may be unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceColors {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

/// Table-driven resolver for hosts without a face system of their own.
///
/// The face named `default` falls back to the theme's foreground and
/// background.
#[derive(Debug, Clone)]
pub struct Theme {
    foreground: Color,
    background: Color,
    faces: BTreeMap<String, FaceColors>,
}

impl Theme {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            faces: BTreeMap::new(),
        }
    }

    /// Add or replace a face.
    #[must_use]
    pub fn with_face(mut self, name: impl Into<String>, colors: FaceColors) -> Self {
        self.faces.insert(name.into(), colors);
        self
    }

    /// Build from the `[theme]` section of the configuration.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        let parse = |value: &str| {
            parse_color(value).map_err(|source| ConfigError::InvalidColor {
                value: value.to_string(),
                source,
            })
        };
        let parse_opt = |value: &Option<String>| value.as_deref().map(parse).transpose();

        let mut theme = Theme::new(
            parse(config.foreground.as_str())?,
            parse(config.background.as_str())?,
        );
        for (name, face) in &config.faces {
            let colors = FaceColors {
                foreground: parse_opt(&face.foreground)?,
                background: parse_opt(&face.background)?,
            };
            theme.faces.insert(name.clone(), colors);
        }
        Ok(theme)
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Color::rgb8(0xd4, 0xd4, 0xd4), Color::rgb8(0x1e, 0x1e, 0x1e))
    }
}

impl ColorResolver for Theme {
    fn face(&self, face: &str, background: bool) -> Option<Color> {
        let colors = self.faces.get(face);
        let picked = colors.and_then(|c| {
            if background {
                c.background
            } else {
                c.foreground
            }
        });
        match picked {
            Some(color) => Some(color),
            None if face == "default" => Some(if background {
                self.background
            } else {
                self.foreground
            }),
            None => None,
        }
    }

    fn face_names(&self) -> Vec<String> {
        self.faces.keys().cloned().collect()
    }

    fn frame_background(&self) -> Color {
        self.background
    }
}
