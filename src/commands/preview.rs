//! Preview command handler

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use indent_bars::bars::leading_width;
use indent_bars::{render_preview, IndentBars, PreviewOptions};

/// Print `file` with its indentation bars.
pub fn handle(
    config_path: Option<&Path>,
    file: &Path,
    cursor_line: Option<usize>,
    use_color: bool,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read file: {:?}", file))?;
    let lines: Vec<&str> = text.lines().collect();

    let mut bars = IndentBars::from_config(&config)?;
    if let Some(line) = cursor_line {
        let index = line
            .checked_sub(1)
            .filter(|&i| i < lines.len())
            .with_context(|| format!("Line {} is outside 1..={}", line, lines.len()))?;
        bars.set_cursor_indent(leading_width(lines[index], config.display.tab_width));
    }

    let options = PreviewOptions {
        color: use_color,
        glyph: config.display.bar_char,
    };
    print!("{}", render_preview(&mut bars, &lines, &options));
    Ok(())
}
