//! Configuration management for indentation bars

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::bars::LayoutOptions;

impl Config {
    /// Get the config file path (~/.config/indent-bars/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/indent-bars)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Layout settings derived from the `[display]` section
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            spacing: self.display.spacing,
            tab_width: self.display.tab_width,
            blank_lines: self.display.blank_lines,
            glyph: if self.display.prefer_character {
                self.display.bar_char
            } else {
                ' '
            },
        }
    }

    /// A starter configuration with depth coloring and highlighting enabled
    pub fn starter() -> Self {
        let mut config = Config::default();
        for (i, color) in ["#d75f5f", "#d7af5f", "#5faf5f", "#5fafd7", "#af87d7"]
            .iter()
            .enumerate()
        {
            config.theme.faces.insert(
                format!("depth-{}", i + 1),
                FaceConfig {
                    foreground: Some(color.to_string()),
                    background: None,
                },
            );
        }
        config.color_by_depth = Some(DepthPaletteConfig {
            source: DepthPaletteSource::Regexp {
                regexp: r"^depth-(\d+)$".to_string(),
            },
            face_bg: false,
            blend: Some(1.0),
        });
        config.highlight = Some(HighlightConfig {
            color: Some(crate::color::ColorSource::value("#ffffff")),
            blend: Some(0.4),
            width: Some(0.5),
            pattern: Some(".".to_string()),
            ..HighlightConfig::default()
        });
        config
    }
}
