//! Terminal preview of a document with bars drawn as glyphs.
//!
//! Terminals cannot show stipples, so every bar is drawn with a glyph in
//! the color of its depth, the way character mode renders bars.

use crossterm::style::{Color as TermColor, Stylize};

use crate::bars::{leading_width, Bar};
use crate::color::Color;
use crate::session::IndentBars;

/// How the preview is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Emit ANSI colors
    pub color: bool,
    /// Glyph drawn for each bar
    pub glyph: char,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            color: true,
            glyph: '│',
        }
    }
}

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.to_rgb8();
    TermColor::Rgb { r, g, b }
}

fn draw_bar(bars: &mut IndentBars, bar: &Bar, options: &PreviewOptions) -> String {
    if !options.color {
        return options.glyph.to_string();
    }
    let face = bars.face_for_depth(bar.depth);
    let styled = options.glyph.to_string().with(term_color(face.color));
    match face.background {
        Some(bg) => styled.on(term_color(bg)).to_string(),
        None => styled.to_string(),
    }
}

/// Render `lines` with their bars, one output line per input line.
///
/// Leading whitespace is expanded to spaces; bars replace the space at their
/// column. Virtual bars on blank lines are appended after the line.
pub fn render_preview<S: AsRef<str>>(
    bars: &mut IndentBars,
    lines: &[S],
    options: &PreviewOptions,
) -> String {
    let layout = bars.layout(lines);
    let tab_width = bars.config().display.tab_width;
    let mut out = String::new();

    for (line, line_bars) in lines.iter().zip(&layout) {
        let line = line.as_ref();
        let indent = leading_width(line, tab_width);
        let body = line.trim_start();

        let mut cells: Vec<String> = vec![" ".to_string(); indent];
        for bar in &line_bars.bars {
            if let Some(cell) = cells.get_mut(bar.column) {
                *cell = draw_bar(bars, bar, options);
            }
        }
        if let Some(padding) = &line_bars.padding {
            for bar in &padding.bars {
                while cells.len() < bar.column {
                    cells.push(" ".to_string());
                }
                cells.push(draw_bar(bars, bar, options));
            }
        }

        out.extend(cells);
        out.push_str(body);
        out.push('\n');
    }
    out
}
