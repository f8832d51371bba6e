//! Picker configuration.
//!
//! Surface sizes and placement, the initial color, the manual-entry format
//! shown first and the hue-strip stops. With the `serde` feature the config
//! deserializes from any serde format, with every field optional.

use crate::color::{ColorFormat, ColorModel};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::gradient::HUE_STRIP_STOPS;

/// Configuration for a [`ColorPicker`](crate::picker::ColorPicker).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerConfig {
    /// Color well width in pixels.
    #[cfg_attr(feature = "serde", serde(default = "default_well_width"))]
    pub well_width: u32,

    /// Color well height in pixels.
    #[cfg_attr(feature = "serde", serde(default = "default_well_height"))]
    pub well_height: u32,

    /// Client position of the color well's top-left corner.
    #[cfg_attr(feature = "serde", serde(default))]
    pub well_origin: Point,

    /// Hue strip width in pixels.
    #[cfg_attr(feature = "serde", serde(default = "default_strip_width"))]
    pub strip_width: u32,

    /// Hue strip height in pixels.
    #[cfg_attr(feature = "serde", serde(default = "default_strip_height"))]
    pub strip_height: u32,

    /// Client position of the hue strip's top-left corner.
    #[cfg_attr(feature = "serde", serde(default = "default_strip_origin"))]
    pub strip_origin: Point,

    /// Initially selected color, in any supported textual form.
    #[cfg_attr(feature = "serde", serde(default = "default_initial_color"))]
    pub initial_color: String,

    /// Manual-entry format shown first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub manual_format: ColorFormat,

    /// Hue strip stops as `(offset, hue)` pairs.
    #[cfg_attr(feature = "serde", serde(default = "default_hue_stops"))]
    pub hue_stops: Vec<(f64, f64)>,
}

fn default_well_width() -> u32 {
    180
}
fn default_well_height() -> u32 {
    84
}
fn default_strip_width() -> u32 {
    180
}
fn default_strip_height() -> u32 {
    12
}
fn default_strip_origin() -> Point {
    Point::new(0.0, 96.0)
}
fn default_initial_color() -> String {
    "#000000".to_string()
}
fn default_hue_stops() -> Vec<(f64, f64)> {
    HUE_STRIP_STOPS.to_vec()
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            well_width: default_well_width(),
            well_height: default_well_height(),
            well_origin: Point::ORIGIN,
            strip_width: default_strip_width(),
            strip_height: default_strip_height(),
            strip_origin: default_strip_origin(),
            initial_color: default_initial_color(),
            manual_format: ColorFormat::default(),
            hue_stops: default_hue_stops(),
        }
    }
}

impl PickerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initially selected color.
    #[must_use]
    pub fn with_initial_color(mut self, color: impl Into<String>) -> Self {
        self.initial_color = color.into();
        self
    }

    /// Set the color well size and position.
    #[must_use]
    pub fn with_well(mut self, origin: Point, width: u32, height: u32) -> Self {
        self.well_origin = origin;
        self.well_width = width;
        self.well_height = height;
        self
    }

    /// Set the hue strip size and position.
    #[must_use]
    pub fn with_strip(mut self, origin: Point, width: u32, height: u32) -> Self {
        self.strip_origin = origin;
        self.strip_width = width;
        self.strip_height = height;
        self
    }

    /// Set the manual-entry format shown first.
    #[must_use]
    pub const fn with_manual_format(mut self, format: ColorFormat) -> Self {
        self.manual_format = format;
        self
    }

    /// Replace the hue strip stops.
    #[must_use]
    pub fn with_hue_stops(mut self, stops: Vec<(f64, f64)>) -> Self {
        self.hue_stops = stops;
        self
    }

    /// Bounds of the color well in client coordinates.
    #[must_use]
    pub fn well_bounds(&self) -> Rect {
        Rect::at(self.well_origin, self.well_width, self.well_height)
    }

    /// Bounds of the hue strip in client coordinates.
    #[must_use]
    pub fn strip_bounds(&self) -> Rect {
        Rect::at(self.strip_origin, self.strip_width, self.strip_height)
    }

    /// Check sizes and parse the initial color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero-sized surface and
    /// [`Error::InvalidColorString`] for an unparseable initial color.
    pub fn validate(&self) -> Result<ColorModel> {
        for (width, height) in [
            (self.well_width, self.well_height),
            (self.strip_width, self.strip_height),
        ] {
            if width == 0 || height == 0 {
                return Err(Error::InvalidDimensions { width, height });
            }
        }
        ColorModel::parse(&self.initial_color)
    }
}
