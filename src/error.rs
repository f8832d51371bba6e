//! Error types for trueno-picker operations.

use thiserror::Error;

use crate::color::ColorChannel;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-picker operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Color string did not start with `#`, `rgb` or `hsl`, or its body was malformed.
    #[error("Invalid color string: {0:?}")]
    InvalidColorString(String),

    /// Manual channel entry rejected; the previous channel value is retained.
    #[error("Rejected input {value:?} for channel {channel:?}")]
    RejectedInput {
        /// Channel the input was typed into.
        channel: ColorChannel,
        /// The rejected text.
        value: String,
    },

    /// Sampling or searching a field with no samples.
    #[error("Palette field is empty")]
    EmptyField,

    /// Invalid dimensions for a framebuffer, field or picker surface.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Raster byte length does not cover `4 * width * height` bytes.
    #[error("Raster length mismatch: expected at least {expected} bytes, got {actual}")]
    RasterLengthMismatch {
        /// Required byte count.
        expected: usize,
        /// Provided byte count.
        actual: usize,
    },

    /// Gradient without stops or with offsets outside `[0, 1]`.
    #[error("Invalid gradient: {0}")]
    InvalidGradient(String),

    /// Sample index outside the field.
    #[error("Sample ({x}, {y}) is outside the {width}x{height} field")]
    OutOfField {
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Field width.
        width: u32,
        /// Field height.
        height: u32,
    },
}
