//! Indentation bars
//!
//! Vertical guides drawn at each indentation level of a text buffer, either
//! as stippled bitmaps or as glyphs, colored by depth, continued across
//! blank lines and highlighted at the cursor's depth.

pub mod bars;
pub mod cache;
pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod preview;
pub mod session;
pub mod stipple;

pub use bars::{bar_positions, blank_run_positions, Bar, LayoutOptions, LineBars, VirtualPadding};
pub use color::{blend, Color, ColorResolver, Theme};
pub use config::Config;
pub use error::{ConfigError, GeometryError};
pub use palette::{color_for_depth, Palette, PaletteBuilder};
pub use preview::{render_preview, PreviewOptions};
pub use session::{BarFace, IndentBars};
pub use stipple::{generate, Bitmap, CellGeometry, PatternSpec};

/// Stipple bitmap for one cell; alias of [`stipple::generate`].
pub use stipple::generate as generate_bitmap;
