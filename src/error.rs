//! Error types for configuration and cell geometry.
//!
//! Both are raised when settings or geometry are handed to the crate, never
//! while laying out or drawing individual lines.

use crate::color::ColorParseError;

/// Malformed bar configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("bar pattern must not be empty")]
    EmptyPattern,

    #[error("bar pattern has invalid character {ch:?} at index {index} (use ' ' for blank, printable ASCII for filled)")]
    InvalidPatternChar { ch: char, index: usize },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a positive integer")]
    NotPositive { field: &'static str },

    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        source: ColorParseError,
    },

    #[error("invalid depth palette regexp {pattern:?}: {message}")]
    InvalidRegexp { pattern: String, message: String },
}

impl ConfigError {
    /// Check that `value` lies in `[min, max]`.
    pub(crate) fn check_range(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), ConfigError> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}

/// Cell geometry the stipple generator cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("cell width must be positive")]
    ZeroWidth,

    #[error("cell height must be positive")]
    ZeroHeight,

    #[error("cell width {width}px exceeds the maximum of {max}px")]
    TooWide { width: u32, max: u32 },

    #[error("rotation {rotation}px must be less than the cell width {width}px")]
    RotationOutOfRange { rotation: u32, width: u32 },
}
