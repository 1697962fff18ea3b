//! Stipple bitmaps for indentation bars.
//!
//! A stipple is one tile of the bar pattern, exactly one character cell wide
//! and tall. The host tiles it across the bar's cell using its own pixel
//! grid, so the tile is rotated by the caller-supplied offset to keep the bar
//! at the same place inside every cell.
//!
//! The vertical layout comes from a fill pattern such as `" . . ."`: each
//! character is one band of rows, blank (space) or filled (anything else).
//! Bands share the cell height as evenly as possible. With zigzag enabled,
//! successive bands drawn with *different* fill characters are displaced
//! alternately left and right.

pub mod bits;

use tracing::debug;

use crate::error::{ConfigError, GeometryError};
use bits::{pack_row, round_px, row_bits, Bits, MAX_BITS};

/// Character that marks a blank band in a fill pattern.
pub const BLANK: char = ' ';

/// Pixel geometry of one character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellGeometry {
    width: u32,
    height: u32,
    rotation: u32,
}

impl CellGeometry {
    /// `rotation` is the pixel offset of the host's stipple grid relative to
    /// the cell, in `[0, width)`.
    pub fn new(width: u32, height: u32, rotation: u32) -> Result<Self, GeometryError> {
        if width == 0 {
            return Err(GeometryError::ZeroWidth);
        }
        if height == 0 {
            return Err(GeometryError::ZeroHeight);
        }
        if width > MAX_BITS {
            return Err(GeometryError::TooWide {
                width,
                max: MAX_BITS,
            });
        }
        if rotation >= width {
            return Err(GeometryError::RotationOutOfRange { rotation, width });
        }
        Ok(Self {
            width,
            height,
            rotation,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rotation(&self) -> u32 {
        self.rotation
    }
}

/// Shape of the bar inside a cell, validated at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSpec {
    width_frac: f64,
    pad_frac: f64,
    pattern: String,
    zigzag: Option<f64>,
}

impl PatternSpec {
    /// `width_frac` and `pad_frac` are fractions of the cell width in
    /// `[0, 1]`; `zigzag` is a fraction in `[-1, 1]` whose sign picks the
    /// direction of the first displacement.
    pub fn new(
        width_frac: f64,
        pad_frac: f64,
        pattern: impl Into<String>,
        zigzag: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        ConfigError::check_range("pattern.width", width_frac, 0.0, 1.0)?;
        ConfigError::check_range("pattern.pad", pad_frac, 0.0, 1.0)?;
        if let Some(z) = zigzag {
            ConfigError::check_range("pattern.zigzag", z, -1.0, 1.0)?;
        }
        validate_pattern(&pattern)?;
        Ok(Self {
            width_frac,
            pad_frac,
            pattern,
            zigzag,
        })
    }

    pub fn width_frac(&self) -> f64 {
        self.width_frac
    }

    pub fn pad_frac(&self) -> f64 {
        self.pad_frac
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn zigzag(&self) -> Option<f64> {
        self.zigzag
    }
}

/// Blank is a space; filled is any other printable ASCII character.
pub fn validate_pattern(pattern: &str) -> Result<(), ConfigError> {
    if pattern.is_empty() {
        return Err(ConfigError::EmptyPattern);
    }
    match pattern
        .chars()
        .enumerate()
        .find(|(_, ch)| *ch != BLANK && !ch.is_ascii_graphic())
    {
        Some((index, ch)) => Err(ConfigError::InvalidPatternChar { ch, index }),
        None => Ok(()),
    }
}

/// One tile of a bar pattern.
///
/// Rows are stored top to bottom, `ceil(width / 8)` bytes each with the
/// lowest byte first and bit 0 as the leftmost pixel (the XBM layout).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_bytes(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Packed row data, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks(self.row_bytes())
    }

    /// Whether the pixel at column `x`, row `y` is set.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.row_bytes() + (x / 8) as usize];
        byte & (1 << (x % 8)) != 0
    }

    /// `#` for set pixels, `.` for clear ones, one line per row.
    pub fn to_ascii(&self) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.pixel(x, y) { '#' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format as an X bitmap (XBM) definition named `name`.
    pub fn to_xbm(&self, name: &str) -> String {
        let mut out = format!(
            "#define {name}_width {}\n#define {name}_height {}\nstatic unsigned char {name}_bits[] = {{",
            self.width, self.height
        );
        for (i, byte) in self.data.iter().enumerate() {
            if i % 12 == 0 {
                out.push_str("\n   ");
            }
            out.push_str(&format!(" 0x{:02x}", byte));
            if i + 1 < self.data.len() {
                out.push(',');
            }
        }
        out.push_str(" };\n");
        out
    }
}

/// Band heights: every band gets `floor(h / n)` or `ceil(h / n)` rows.
///
/// A filled band that follows a short band prefers the tall size, as long as
/// the remaining bands can still add up to the cell height.
struct ChunkSizer {
    small: u32,
    large: u32,
    rows_left: u32,
    chunks_left: u32,
    prev: Option<u32>,
}

impl ChunkSizer {
    fn new(height: u32, chunks: u32) -> Self {
        Self {
            small: height / chunks,
            large: height.div_ceil(chunks),
            rows_left: height,
            chunks_left: chunks,
            prev: None,
        }
    }

    fn next(&mut self, ch: char) -> u32 {
        let preferred = match self.prev {
            Some(prev) if ch != BLANK && prev == self.small => self.large,
            _ => self.small,
        };
        let after = self.chunks_left - 1;
        let min = self.rows_left.saturating_sub(after * self.large);
        let max = self.rows_left - after * self.small;
        let size = preferred.clamp(min, max);

        self.rows_left -= size;
        self.chunks_left = after;
        self.prev = Some(size);
        size
    }
}

/// Horizontal zigzag displacement, carried across bands.
///
/// The sign flips whenever a filled band uses a different character than
/// the last filled band, however many blank bands lie between them.
#[derive(Debug, Clone, Copy)]
struct Zigzag {
    last_fill: Option<char>,
    offset: i64,
}

impl Zigzag {
    fn new(offset: i64) -> Self {
        Self {
            last_fill: None,
            offset,
        }
    }

    /// Offset for a filled band drawn with `ch`.
    fn advance(&mut self, ch: char) -> i64 {
        if matches!(self.last_fill, Some(last) if last != ch) {
            self.offset = -self.offset;
        }
        self.last_fill = Some(ch);
        self.offset
    }
}

/// Generate the stipple tile for `spec` in a cell of `geometry`.
///
/// The result is always exactly `geometry.width()` by `geometry.height()`.
pub fn generate(geometry: &CellGeometry, spec: &PatternSpec) -> Bitmap {
    let width = geometry.width();
    let height = geometry.height();
    let rotation = geometry.rotation();

    let pattern: Vec<char> = spec.pattern().chars().take(height as usize).collect();
    let pad = round_px(width as f64 * spec.pad_frac());
    let zigzag = spec.zigzag().map_or(0, |z| round_px(width as f64 * z));

    let mut data = Vec::with_capacity(width.div_ceil(8) as usize * height as usize);

    if let [ch] = pattern.as_slice() {
        if *ch != BLANK {
            // solid bar
            let mut row = Vec::new();
            pack_row(row_bits(width, pad, rotation, spec.width_frac()), width, &mut row);
            for _ in 0..height {
                data.extend_from_slice(&row);
            }
            debug!(width, height, rotation, "generated solid stipple");
            return Bitmap {
                width,
                height,
                data,
            };
        }
    }

    let mut sizer = ChunkSizer::new(height, pattern.len() as u32);
    let mut zz = Zigzag::new(zigzag);
    let mut current: Option<(char, Vec<u8>)> = None;

    for &ch in &pattern {
        let rows = sizer.next(ch);
        let reuse = matches!(&current, Some((prev, _)) if *prev == ch);
        if !reuse {
            let bits: Bits = if ch == BLANK {
                0
            } else {
                row_bits(width, pad + zz.advance(ch), rotation, spec.width_frac())
            };
            let mut row = Vec::new();
            pack_row(bits, width, &mut row);
            current = Some((ch, row));
        }
        if let Some((_, row)) = &current {
            for _ in 0..rows {
                data.extend_from_slice(row);
            }
        }
    }

    debug!(
        width,
        height,
        rotation,
        pattern = spec.pattern(),
        "generated stipple"
    );
    Bitmap {
        width,
        height,
        data,
    }
}
