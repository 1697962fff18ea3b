//! Line scanning: indentation widths and whole-document layout.

use unicode_width::UnicodeWidthChar;

use super::{blank_run_positions, indent_depth, line_bars, LineBars};

/// How a document is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Indentation width in columns (> 0).
    pub spacing: usize,
    /// Tab stop interval in columns (> 0).
    pub tab_width: usize,
    /// Continue bars across runs of blank lines.
    pub blank_lines: bool,
    /// Glyph written into virtual padding.
    pub glyph: char,
}

/// Display width of the leading whitespace of `line`, expanding tabs to the
/// next multiple of `tab_width`.
pub fn leading_width(line: &str, tab_width: usize) -> usize {
    let mut col = 0;
    for ch in line.chars() {
        match ch {
            '\t' => col += tab_width - col % tab_width,
            '\r' | '\n' => break,
            c if c.is_whitespace() => col += c.width().unwrap_or(1),
            _ => break,
        }
    }
    col
}

/// Whether `line` holds only whitespace (or nothing).
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Bars for every line of a document.
///
/// Non-blank lines get the bars inside their own indentation. Each maximal
/// run of blank lines is expanded with the bars of the surrounding code,
/// unless `blank_lines` is off or the run touches either end of the
/// document.
pub fn layout_lines<S: AsRef<str>>(lines: &[S], options: &LayoutOptions) -> Vec<LineBars> {
    let widths: Vec<usize> = lines
        .iter()
        .map(|l| leading_width(l.as_ref(), options.tab_width))
        .collect();
    let blank: Vec<bool> = lines.iter().map(|l| is_blank(l.as_ref())).collect();

    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if !blank[i] || !options.blank_lines {
            out.push(LineBars {
                bars: line_bars(widths[i], options.spacing),
                padding: None,
            });
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && blank[i] {
            i += 1;
        }
        let before = start
            .checked_sub(1)
            .map(|prev| indent_depth(widths[prev], options.spacing));
        let after = (i < lines.len()).then(|| indent_depth(widths[i], options.spacing));
        out.extend(blank_run_positions(
            &widths[start..i],
            before,
            after,
            options.spacing,
            options.glyph,
        ));
    }
    out
}
