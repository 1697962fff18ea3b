//! Bars across runs of blank lines.
//!
//! Blank lines usually have less whitespace than the code around them (often
//! none), which would break bars at every empty line inside a block. The
//! bars of the enclosing context are continued across the run: bars that
//! fit inside a blank line's own whitespace are drawn normally, the rest are
//! carried by a display-only padding string attached at the end of the line.

use super::{bar_count, line_bars, Bar, LineBars};

/// Display-only text appended at the end of a blank line.
///
/// The text starts at `start_column` (the line's own width); it is spaces
/// except at each bar's column, which holds the bar glyph. It is never part
/// of the document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualPadding {
    pub start_column: usize,
    pub text: String,
    pub bars: Vec<Bar>,
}

impl VirtualPadding {
    fn new(start_column: usize, bars: Vec<Bar>, glyph: char) -> Self {
        let mut text = String::new();
        let mut col = start_column;
        for bar in &bars {
            while col < bar.column {
                text.push(' ');
                col += 1;
            }
            text.push(glyph);
            col += 1;
        }
        Self {
            start_column,
            text,
            bars,
        }
    }

    /// Offset of `bar` from the start of the padding text, in columns.
    pub fn offset(&self, bar: &Bar) -> usize {
        bar.column - self.start_column
    }
}

/// Context of a maximal run of blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankRun {
    /// The run touches the start or the end of the buffer: no virtual bars.
    Excluded,
    /// The run sits between two non-blank lines; `context_depth` bars are
    /// continued across it.
    Active { context_depth: usize },
}

impl BlankRun {
    /// Context for a run between lines of depth `before` and `after`
    /// (`None` at a buffer boundary).
    ///
    /// The context is one less than the deeper of the two neighbours: a
    /// neighbour at depth `d` draws bars for depths `1..d`.
    pub fn new(before: Option<usize>, after: Option<usize>) -> Self {
        match (before, after) {
            (Some(before), Some(after)) => BlankRun::Active {
                context_depth: before.max(after).saturating_sub(1),
            },
            _ => BlankRun::Excluded,
        }
    }

    pub fn context_depth(&self) -> usize {
        match self {
            BlankRun::Excluded => 0,
            BlankRun::Active { context_depth } => *context_depth,
        }
    }
}

/// Bars for each line of a blank run.
///
/// `line_lens` holds the width of each blank line's whitespace, in order.
/// `before` and `after` are the indentation depths of the non-blank lines
/// bounding the run, `None` when the run touches the buffer start or end.
/// Virtual bars use `glyph` in the padding text.
pub fn blank_run_positions(
    line_lens: &[usize],
    before: Option<usize>,
    after: Option<usize>,
    spacing: usize,
    glyph: char,
) -> Vec<LineBars> {
    let context_depth = BlankRun::new(before, after).context_depth();

    line_lens
        .iter()
        .map(|&len| {
            let bars = line_bars(len, spacing);
            let real_depth = bar_count(len, spacing);
            let padding = (context_depth > real_depth).then(|| {
                let virtual_bars = (real_depth + 1..=context_depth)
                    .map(|depth| Bar {
                        column: depth * spacing,
                        depth,
                    })
                    .collect();
                VirtualPadding::new(len, virtual_bars, glyph)
            });
            LineBars { bars, padding }
        })
        .collect()
}
