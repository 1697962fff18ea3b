//! CLI definitions for indent-bars
//!
//! The clap structure lives apart from main.rs so the command handlers and
//! tests can share it.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build clap styles for consistent CLI appearance.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "indent-bars")]
#[command(about = "Indentation bars: stipple bitmaps, depth palettes and previews")]
#[command(long_about = "indent-bars draws vertical guides at each indentation level.

It generates the stipple bitmaps hosts use to paint bars, shows the colors
assigned to each depth, and previews a file with its bars in the terminal.

QUICK START:
    indent-bars stipple --cell-width 10 --cell-height 20
    indent-bars palette --depths 8
    indent-bars preview src/main.rs --cursor-line 12
    indent-bars config init")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Configuration file (default: ~/.config/indent-bars/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the stipple bitmap for one character cell
    #[command(long_about = "Print the stipple bitmap for one character cell.

Filled pixels are drawn as '#', empty ones as '.'. With --xbm the bitmap is
printed as XBM source instead.

EXAMPLES:
    indent-bars stipple --cell-width 10 --cell-height 20
    indent-bars stipple --cell-width 9 --cell-height 18 --rotation 3
    indent-bars stipple --cell-width 10 --cell-height 20 --xbm bar")]
    Stipple {
        /// Cell width in pixels (1-128)
        #[arg(long, value_name = "PX")]
        cell_width: u32,
        /// Cell height in pixels
        #[arg(long, value_name = "PX")]
        cell_height: u32,
        /// Horizontal rotation of the tile in pixels
        #[arg(long, default_value_t = 0, value_name = "PX")]
        rotation: u32,
        /// Print XBM source with this identifier
        #[arg(long, value_name = "NAME")]
        xbm: Option<String>,
        /// Use the current-depth highlight pattern
        #[arg(long)]
        highlight: bool,
    },

    /// Show the color assigned to each depth
    Palette {
        /// Number of depths to show
        #[arg(long, default_value_t = 8)]
        depths: usize,
    },

    /// Print a file with its indentation bars
    #[command(long_about = "Print a file with its indentation bars drawn as glyphs.

Bars are colored by depth. Blank lines inside a block carry the bars of the
surrounding code. With --cursor-line the innermost bar of that line is
highlighted.

EXAMPLES:
    indent-bars preview src/lib.rs
    indent-bars preview src/lib.rs --cursor-line 40
    indent-bars preview notes.txt --no-color")]
    Preview {
        /// File to preview
        file: PathBuf,
        /// 1-based line whose depth is highlighted
        #[arg(long, value_name = "LINE")]
        cursor_line: Option<usize>,
        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
