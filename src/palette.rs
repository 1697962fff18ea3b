//! Bar colors: the main color, the per-depth palette and the current-depth
//! highlight.

use regex::Regex;
use tracing::{debug, warn};

use crate::color::{blend, Color, ColorResolver, ColorSource, FALLBACK_COLOR};
use crate::config::{ColorConfig, DepthPaletteConfig, DepthPaletteSource, HighlightConfig};

/// A color blended into the main color before it meets the frame background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub color: Color,
    pub blend: f64,
}

/// Colors to pick from by depth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Palette {
    /// No depth-specific coloring; every depth uses the main color.
    #[default]
    None,
    /// One color for every depth.
    Single(Color),
    /// Cycled through by depth: depth `d` uses entry `(d - 1) % len`.
    Cyclic(Vec<Color>),
}

impl Palette {
    pub fn is_none(&self) -> bool {
        matches!(self, Palette::None)
    }
}

/// Pick the color for `depth` (1-based) from `palette`, falling back to
/// `main`.
pub fn color_for_depth(depth: usize, palette: &Palette, main: Color) -> Color {
    debug_assert!(depth >= 1, "depth 0 is never drawn");
    match palette {
        Palette::Cyclic(colors) if !colors.is_empty() => {
            colors[depth.saturating_sub(1) % colors.len()]
        }
        Palette::Single(color) => *color,
        _ => main,
    }
}

/// Resolves configured colors against a host.
pub struct PaletteBuilder<'a> {
    resolver: &'a dyn ColorResolver,
    frame_background: Color,
}

impl<'a> PaletteBuilder<'a> {
    pub fn new(resolver: &'a dyn ColorResolver) -> Self {
        Self {
            frame_background: resolver.frame_background(),
            resolver,
        }
    }

    /// Blend targets use `frame_background` instead of the resolver's.
    #[must_use]
    pub fn with_frame_background(mut self, frame_background: Color) -> Self {
        self.frame_background = frame_background;
        self
    }

    fn resolve(&self, source: &ColorSource, face_bg: bool) -> Option<Color> {
        source.resolve(self.resolver, face_bg)
    }

    fn resolve_or_fallback(&self, source: &ColorSource, face_bg: bool) -> Color {
        self.resolve(source, face_bg).unwrap_or_else(|| {
            warn!(source = ?source, "unresolvable bar color, using fallback");
            FALLBACK_COLOR
        })
    }

    /// The main bar color.
    ///
    /// A `tint` is blended into the resolved color first; the result is
    /// then blended into the frame background when `config.blend` is set.
    pub fn main_color(&self, config: &ColorConfig, tint: Option<Tint>) -> Color {
        let mut color = self.resolve_or_fallback(&config.main, config.face_bg);
        if let Some(tint) = tint {
            color = blend(tint.color, color, tint.blend);
        }
        match config.blend {
            Some(factor) => blend(color, self.frame_background, factor),
            None => color,
        }
    }

    /// Ordered colors for depth-based coloring; empty when no palette is
    /// configured.
    pub fn depth_palette(
        &self,
        config: Option<&DepthPaletteConfig>,
        main: &ColorConfig,
    ) -> Vec<Color> {
        let Some(config) = config else {
            return Vec::new();
        };

        let colors: Vec<Color> = match &config.source {
            DepthPaletteSource::Regexp { regexp } => self.face_palette(regexp, config.face_bg),
            DepthPaletteSource::Palette { palette } => palette
                .iter()
                .filter_map(|source| {
                    let color = self.resolve(source, config.face_bg);
                    if color.is_none() {
                        warn!(source = ?source, "skipping unresolvable depth palette entry");
                    }
                    color
                })
                .collect(),
        };

        let colors = match config.blend {
            Some(factor) => colors
                .into_iter()
                .map(|c| {
                    self.main_color(
                        main,
                        Some(Tint {
                            color: c,
                            blend: factor,
                        }),
                    )
                })
                .collect(),
            None => colors,
        };
        debug!(len = colors.len(), "built depth palette");
        colors
    }

    /// Faces whose names match `regexp`, ordered by the number in capture
    /// group 1. Faces without a number sort last, in host order.
    fn face_palette(&self, regexp: &str, face_bg: bool) -> Vec<Color> {
        let re = match Regex::new(regexp) {
            Ok(re) => re,
            Err(err) => {
                // validated with the config; only reachable for hand-built configs
                warn!(%regexp, %err, "invalid depth palette regexp");
                return Vec::new();
            }
        };

        let mut matched: Vec<(Option<u64>, String)> = self
            .resolver
            .face_names()
            .into_iter()
            .filter_map(|name| {
                let caps = re.captures(&name)?;
                let number = caps.get(1).and_then(|m| m.as_str().parse().ok());
                Some((number, name))
            })
            .collect();
        matched.sort_by_key(|(number, _)| (number.is_none(), number.unwrap_or(0)));

        matched
            .into_iter()
            .filter_map(|(_, face)| {
                let color = self.resolver.face(&face, face_bg);
                if color.is_none() {
                    warn!(%face, "skipping unresolvable depth palette face");
                }
                color
            })
            .collect()
    }

    /// Colors for the current depth, or `None` when no highlight color is
    /// configured. An unresolvable highlight color falls back like the main
    /// color does.
    ///
    /// Without a blend factor the highlight is a single color. With one, the
    /// highlight color is blended into every depth palette entry, or into
    /// the main color when there is no depth palette.
    pub fn current_depth_palette(
        &self,
        config: Option<&HighlightConfig>,
        depth_palette: &[Color],
        main: Color,
    ) -> Option<Palette> {
        let config = config?;
        let color = self.resolve_or_fallback(config.color.as_ref()?, config.face_bg);
        let palette = match config.blend {
            None => Palette::Single(color),
            Some(factor) if depth_palette.is_empty() => {
                Palette::Single(blend(color, main, factor))
            }
            Some(factor) => Palette::Cyclic(
                depth_palette
                    .iter()
                    .map(|&c| blend(color, c, factor))
                    .collect(),
            ),
        };
        Some(palette)
    }

    /// Background behind highlighted bars, if configured.
    pub fn highlight_background(&self, config: Option<&HighlightConfig>) -> Option<Color> {
        let source = config?.background.as_ref()?;
        self.resolve(source, true)
    }
}
