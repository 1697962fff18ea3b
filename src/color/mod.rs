//! RGB colors with 16-bit channels.
//!
//! Bar colors are computed by blending theme colors into each other and into
//! the frame background, so channels keep 16 bits of precision and are only
//! reduced to 8 bits when formatted as `#rrggbb`.

use std::fmt;
use std::str::FromStr;

pub mod named;
pub mod resolve;

pub use resolve::{ColorResolver, ColorSource, FaceColors, Theme};

/// Used whenever a color reference cannot be resolved by the host.
pub const FALLBACK_COLOR: Color = Color::rgb8(0x80, 0x80, 0x80);

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

/// Errors produced when parsing a color literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex colors must start with '#'")]
    MissingHash,
    #[error("invalid hex length {0} (expected 3, 6 or 12 digits)")]
    InvalidLength(usize),
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("unknown color name {0:?}")]
    UnknownName(String),
}

impl Color {
    /// Build a color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as u16 * 257,
            g: g as u16 * 257,
            b: b as u16 * 257,
        }
    }

    /// Channels reduced to 8 bits, rounded to nearest.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let reduce = |c: u16| ((c as u32 * 255 + 32767) / 65535) as u8;
        (reduce(self.r), reduce(self.g), reduce(self.b))
    }

    /// Format as a 24-bit `#rrggbb` string.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Interpolate towards `other`; see [`blend`].
    #[must_use]
    pub fn blend(self, other: Color, factor: f64) -> Color {
        blend(self, other, factor)
    }
}

/// Linear interpolation per channel: `factor * c1 + (1 - factor) * c2`.
///
/// `factor` is not clamped, so values outside `[0, 1]` extrapolate. The
/// result saturates at the channel limits.
pub fn blend(c1: Color, c2: Color, factor: f64) -> Color {
    let mix = |a: u16, b: u16| -> u16 {
        let v = factor * a as f64 + (1.0 - factor) * b as f64;
        // `as` saturates out-of-range floats
        v.round() as u16
    };
    Color {
        r: mix(c1.r, c2.r),
        g: mix(c1.g, c2.g),
        b: mix(c1.b, c2.b),
    }
}

/// Parse either a hex literal or a built-in color name.
pub fn parse_color(value: &str) -> Result<Color, ColorParseError> {
    let value = value.trim();
    if value.starts_with('#') || value.is_empty() {
        value.parse()
    } else {
        named::lookup(value).ok_or_else(|| ColorParseError::UnknownName(value.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#rgb`, `#rrggbb` or `#rrrrggggbbbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let hex = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex);
        }

        let digits = match hex.len() {
            3 | 6 | 12 => hex.len() / 3,
            n => return Err(ColorParseError::InvalidLength(n)),
        };
        let channel = |i: usize| -> Result<u16, ColorParseError> {
            let part = &hex[i * digits..(i + 1) * digits];
            let v = u16::from_str_radix(part, 16).map_err(|_| ColorParseError::InvalidHex)?;
            // scale to 16 bits by repeating the digits (f -> ffff, ab -> abab)
            Ok(match digits {
                1 => v * 0x1111,
                2 => v * 257,
                _ => v,
            })
        };

        Ok(Color {
            r: channel(0)?,
            g: channel(1)?,
            b: channel(2)?,
        })
    }
}
