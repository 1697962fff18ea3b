//! Per-document bar state: validated settings, resolved colors, cell
//! geometry and the depth caches.

use std::sync::Arc;

use tracing::debug;

use crate::bars::{current_depth, layout_lines, LayoutOptions, LineBars};
use crate::cache::DepthCache;
use crate::color::{Color, ColorResolver, Theme};
use crate::config::Config;
use crate::error::ConfigError;
use crate::palette::{self, Palette, PaletteBuilder};
use crate::stipple::{self, Bitmap, CellGeometry, PatternSpec};

/// Everything a host needs to draw the bars of one depth.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFace {
    pub depth: usize,
    pub color: Color,
    /// Background behind the bar; `None` leaves the text background alone.
    pub background: Option<Color>,
    /// Stipple tile; `None` in character mode or before the cell geometry is
    /// known.
    pub bitmap: Option<Arc<Bitmap>>,
    pub highlighted: bool,
}

/// Colors resolved from the configuration.
#[derive(Debug, Clone)]
struct ResolvedColors {
    main: Color,
    palette: Palette,
    highlight: Option<Palette>,
    highlight_background: Option<Color>,
}

impl ResolvedColors {
    fn resolve(config: &Config, resolver: &dyn ColorResolver) -> Self {
        let builder = PaletteBuilder::new(resolver);
        let main = builder.main_color(&config.color, None);
        let depth_colors = builder.depth_palette(config.color_by_depth.as_ref(), &config.color);
        let highlight =
            builder.current_depth_palette(config.highlight.as_ref(), &depth_colors, main);
        let highlight_background = builder.highlight_background(config.highlight.as_ref());
        let palette = if depth_colors.is_empty() {
            Palette::None
        } else {
            Palette::Cyclic(depth_colors)
        };
        Self {
            main,
            palette,
            highlight,
            highlight_background,
        }
    }
}

/// Indentation bar state for one document or session.
///
/// Depth colors and bitmaps are memoized. A configuration change invalidates
/// both tables; a geometry change invalidates bitmaps only. The current
/// depth is applied on lookup and never invalidates anything.
#[derive(Debug)]
pub struct IndentBars {
    config: Config,
    pattern: PatternSpec,
    highlight_pattern: Option<PatternSpec>,
    colors: ResolvedColors,
    geometry: Option<CellGeometry>,
    current_depth: usize,
    /// Bumped by configuration changes; tags the color cache.
    config_generation: u64,
    /// Bumped by configuration and geometry changes; tags the bitmap cache.
    bitmap_generation: u64,
    depth_colors: DepthCache<Color>,
    bitmaps: DepthCache<Arc<Bitmap>>,
    highlight_bitmap: Option<Arc<Bitmap>>,
}

impl IndentBars {
    /// Validate `config` and resolve its colors against `resolver`.
    pub fn new(config: &Config, resolver: &dyn ColorResolver) -> Result<Self, ConfigError> {
        config.validate()?;
        let pattern = config.pattern.to_spec()?;
        let highlight_pattern = match &config.highlight {
            Some(h) => h.pattern_spec(&pattern)?,
            None => None,
        };
        Ok(Self {
            colors: ResolvedColors::resolve(config, resolver),
            config: config.clone(),
            pattern,
            highlight_pattern,
            geometry: None,
            current_depth: 0,
            config_generation: 0,
            bitmap_generation: 0,
            depth_colors: DepthCache::new(),
            bitmaps: DepthCache::new(),
            highlight_bitmap: None,
        })
    }

    /// Build with the configuration's own `[theme]` as the color resolver.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let theme = Theme::from_config(&config.theme)?;
        Self::new(config, &theme)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout_options(&self) -> LayoutOptions {
        self.config.layout_options()
    }

    pub fn geometry(&self) -> Option<CellGeometry> {
        self.geometry
    }

    pub fn main_color(&self) -> Color {
        self.colors.main
    }

    pub fn palette(&self) -> &Palette {
        &self.colors.palette
    }

    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    /// Replace the configuration. On error the previous state is kept.
    pub fn on_config_change(
        &mut self,
        config: &Config,
        resolver: &dyn ColorResolver,
    ) -> Result<(), ConfigError> {
        let fresh = Self::new(config, resolver)?;
        self.config = fresh.config;
        self.pattern = fresh.pattern;
        self.highlight_pattern = fresh.highlight_pattern;
        self.colors = fresh.colors;
        self.config_generation += 1;
        self.bitmap_generation += 1;
        self.highlight_bitmap = None;
        debug!(generation = self.config_generation, "bar configuration changed");
        Ok(())
    }

    /// Record a new cell geometry. Bitmaps are regenerated lazily; colors are
    /// kept.
    pub fn on_geometry_change(&mut self, geometry: CellGeometry) {
        if self.geometry == Some(geometry) {
            return;
        }
        self.geometry = Some(geometry);
        self.bitmap_generation += 1;
        self.highlight_bitmap = None;
        debug!(
            width = geometry.width(),
            height = geometry.height(),
            rotation = geometry.rotation(),
            "cell geometry changed"
        );
    }

    /// Set the depth to highlight (0 for none).
    pub fn set_current_depth(&mut self, depth: usize) {
        self.current_depth = depth;
    }

    /// Highlight the innermost bar of a line indented by `indent_len`
    /// columns.
    pub fn set_cursor_indent(&mut self, indent_len: usize) {
        self.set_current_depth(current_depth(indent_len, self.config.display.spacing));
    }

    fn is_highlighted(&self, depth: usize) -> bool {
        depth > 0
            && depth == self.current_depth
            && (self.colors.highlight.is_some() || self.highlight_pattern.is_some())
    }

    /// Color of the bars at `depth`, honouring the current-depth highlight.
    pub fn color_for_depth(&mut self, depth: usize) -> Color {
        if self.is_highlighted(depth) {
            if let Some(highlight) = &self.colors.highlight {
                return palette::color_for_depth(depth, highlight, self.colors.main);
            }
        }
        let colors = &self.colors;
        *self
            .depth_colors
            .get_or_insert_with(depth, self.config_generation, || {
                palette::color_for_depth(depth, &colors.palette, colors.main)
            })
    }

    /// Stipple for the bars at `depth`, or `None` in character mode or
    /// before any geometry is known.
    pub fn bitmap_for_depth(&mut self, depth: usize) -> Option<Arc<Bitmap>> {
        if self.config.display.prefer_character {
            return None;
        }
        let geometry = self.geometry?;

        if self.is_highlighted(depth) {
            if let Some(spec) = &self.highlight_pattern {
                let bitmap = self
                    .highlight_bitmap
                    .get_or_insert_with(|| Arc::new(stipple::generate(&geometry, spec)));
                return Some(Arc::clone(bitmap));
            }
        }

        let generation = self.bitmap_generation;
        // every regular depth shares one tile
        let shared = self.bitmaps.any(generation).cloned();
        let pattern = &self.pattern;
        let bitmap = self.bitmaps.get_or_insert_with(depth, generation, || {
            shared.unwrap_or_else(|| Arc::new(stipple::generate(&geometry, pattern)))
        });
        Some(Arc::clone(bitmap))
    }

    /// Everything needed to draw the bars at `depth`.
    pub fn face_for_depth(&mut self, depth: usize) -> BarFace {
        let highlighted = self.is_highlighted(depth);
        BarFace {
            depth,
            color: self.color_for_depth(depth),
            background: if highlighted {
                self.colors.highlight_background
            } else {
                None
            },
            bitmap: self.bitmap_for_depth(depth),
            highlighted,
        }
    }

    /// Bars for every line of a document.
    pub fn layout<S: AsRef<str>>(&self, lines: &[S]) -> Vec<LineBars> {
        layout_lines(lines, &self.layout_options())
    }

    /// Number of memoized depth colors.
    pub fn cached_colors(&self) -> usize {
        if self.depth_colors.generation() == self.config_generation {
            self.depth_colors.len()
        } else {
            0
        }
    }

    /// Number of memoized depth bitmaps.
    pub fn cached_bitmaps(&self) -> usize {
        if self.bitmaps.generation() == self.bitmap_generation {
            self.bitmaps.len()
        } else {
            0
        }
    }
}
