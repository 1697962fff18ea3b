//! Where bars go on each line.
//!
//! Columns are zero-based display columns. A bar of depth `k` sits at column
//! `k * spacing`, so a line only shows the bars that fall strictly inside its
//! leading whitespace.

pub mod blank;
pub mod lines;

pub use blank::{blank_run_positions, BlankRun, VirtualPadding};
pub use lines::{is_blank, layout_lines, leading_width, LayoutOptions};

/// A bar drawn at `column` for indentation `depth` (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bar {
    pub column: usize,
    pub depth: usize,
}

/// Bars for one line: real bars inside the line's own whitespace, plus an
/// optional display-only padding carrying bars past the end of a blank line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBars {
    pub bars: Vec<Bar>,
    pub padding: Option<VirtualPadding>,
}

impl LineBars {
    /// Real and virtual bars, left to right.
    pub fn all_bars(&self) -> impl Iterator<Item = Bar> + '_ {
        self.bars
            .iter()
            .chain(self.padding.iter().flat_map(|p| p.bars.iter()))
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.padding.is_none()
    }
}

/// Bar columns within a leading whitespace run of `ws_len` columns: every
/// multiple of `spacing` strictly less than `ws_len`, for depths 1, 2, 3, ...
pub fn bar_positions(ws_len: usize, spacing: usize) -> Vec<usize> {
    debug_assert!(spacing > 0, "spacing must be positive");
    (1..)
        .map(|k| k * spacing)
        .take_while(|&col| col < ws_len)
        .collect()
}

/// Bars for a line whose leading whitespace spans `ws_len` columns.
pub fn line_bars(ws_len: usize, spacing: usize) -> Vec<Bar> {
    bar_positions(ws_len, spacing)
        .into_iter()
        .enumerate()
        .map(|(i, column)| Bar {
            column,
            depth: i + 1,
        })
        .collect()
}

/// Number of bars drawn inside `ws_len` columns of whitespace.
pub fn bar_count(ws_len: usize, spacing: usize) -> usize {
    ws_len.saturating_sub(1) / spacing
}

/// Indentation depth of a line with `indent_len` columns of indentation.
pub fn indent_depth(indent_len: usize, spacing: usize) -> usize {
    indent_len / spacing
}

/// Depth to highlight for a cursor on a line indented by `indent_len`
/// columns: the innermost bar drawn on that line, 0 if there is none.
pub fn current_depth(indent_len: usize, spacing: usize) -> usize {
    bar_count(indent_len, spacing)
}
