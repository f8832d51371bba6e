//! Color values convertible between hexadecimal, RGB and HSL.
//!
//! A [`ColorModel`] is created in exactly one native format. The other two
//! formats are computed on first access and cached, so repeated reads return
//! the same values without recomputation.
//!
//! ```
//! use trueno_picker::color::ColorModel;
//!
//! let red: ColorModel = "rgb(255, 0, 0)".parse().unwrap();
//! assert_eq!(red.hex(), "ff0000");
//! assert_eq!(red.as_hsl(), "hsl(0,100%,50%)");
//! ```

pub mod channel;
pub mod convert;
pub mod rgba;

use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub use channel::{ChannelGroup, ChannelInput, ChannelValue, ColorChannel};
pub use convert::Triple;
pub use rgba::Rgba;

/// The three textual color formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFormat {
    /// `#rrggbb`.
    Hex,
    /// `rgb(r,g,b)`.
    #[default]
    Rgb,
    /// `hsl(h,s%,l%)`.
    Hsl,
}

impl ColorFormat {
    /// All formats in toggle order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// The format that follows this one when cycling HEX → RGB → HSL → HEX.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hex => Self::Rgb,
            Self::Rgb => Self::Hsl,
            Self::Hsl => Self::Hex,
        }
    }

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }
}

/// Channel values tagged with their format.
#[derive(Debug, Clone, PartialEq)]
pub enum Channels {
    /// Hex digits without `#`.
    Hex(String),
    /// Red, green, blue.
    Rgb(f64, f64, f64),
    /// Hue, saturation, lightness.
    Hsl(f64, f64, f64),
}

impl Channels {
    /// Format these channels belong to.
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        match self {
            Self::Hex(_) => ColorFormat::Hex,
            Self::Rgb(..) => ColorFormat::Rgb,
            Self::Hsl(..) => ColorFormat::Hsl,
        }
    }
}

/// A color with lazily computed, cached hex/RGB/HSL representations.
///
/// Values given natively keep their exact numbers; values derived through a
/// conversion are rounded to the nearest integer. Equality compares the hex
/// representation.
#[derive(Debug, Clone)]
pub struct ColorModel {
    native: ColorFormat,
    hex: OnceCell<String>,
    rgb: OnceCell<Triple>,
    hsl: OnceCell<Triple>,
}

impl ColorModel {
    fn with_native(channels: Channels) -> Self {
        let mut model = Self {
            native: channels.format(),
            hex: OnceCell::new(),
            rgb: OnceCell::new(),
            hsl: OnceCell::new(),
        };
        match channels {
            Channels::Hex(hex) => model.hex = OnceCell::from(hex),
            Channels::Rgb(r, g, b) => model.rgb = OnceCell::from((r, g, b)),
            Channels::Hsl(h, s, l) => model.hsl = OnceCell::from((h, s, l)),
        }
        model
    }

    /// Create from hex digits, optionally prefixed with `#`, case-insensitive.
    ///
    /// The digits are stored verbatim (lowercased); they are not validated.
    #[must_use]
    pub fn from_hex(s: &str) -> Self {
        let lower = s.to_lowercase();
        let digits = lower.strip_prefix('#').unwrap_or(&lower);
        Self::with_native(Channels::Hex(digits.to_string()))
    }

    /// Create from native RGB channels.
    #[must_use]
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::with_native(Channels::Rgb(r, g, b))
    }

    /// Create from native HSL channels.
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::with_native(Channels::Hsl(h, s, l))
    }

    /// Create from channel values tagged with their format.
    #[must_use]
    pub fn from_channels(channels: Channels) -> Self {
        match channels {
            Channels::Hex(hex) => Self::from_hex(&hex),
            other => Self::with_native(other),
        }
    }

    /// Parse `rgb(r,g,b)`; whitespace anywhere is ignored.
    pub fn from_rgb_string(s: &str) -> Result<Self> {
        let (r, g, b) = parse_function(s, "rgb", &[])?;
        Ok(Self::from_rgb(r, g, b))
    }

    /// Parse `hsl(h,s%,l%)`; `%` signs and whitespace are ignored.
    pub fn from_hsl_string(s: &str) -> Result<Self> {
        let (h, s_, l) = parse_function(s, "hsl", &['%'])?;
        Ok(Self::from_hsl(h, s_, l))
    }

    /// Parse any of `#rrggbb`, `rgb(r,g,b)` or `hsl(h,s%,l%)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColorString`] when the prefix is unrecognized or
    /// the channel list is malformed.
    pub fn parse(s: &str) -> Result<Self> {
        let lower = s.trim_start().to_lowercase();
        if lower.starts_with('#') {
            Ok(Self::from_hex(&lower))
        } else if lower.starts_with("rgb") {
            Self::from_rgb_string(s)
        } else if lower.starts_with("hsl") {
            Self::from_hsl_string(s)
        } else {
            Err(Error::InvalidColorString(s.to_string()))
        }
    }

    /// The format this color was constructed in.
    #[must_use]
    pub const fn native_format(&self) -> ColorFormat {
        self.native
    }

    /// Compute (once) and return the channels for `format`.
    pub fn resolve(&self, format: ColorFormat) -> Channels {
        match format {
            ColorFormat::Hex => Channels::Hex(self.hex().to_string()),
            ColorFormat::Rgb => {
                let (r, g, b) = self.rgb();
                Channels::Rgb(r, g, b)
            }
            ColorFormat::Hsl => {
                let (h, s, l) = self.hsl();
                Channels::Hsl(h, s, l)
            }
        }
    }

    /// Six lowercase hex digits, without `#`.
    pub fn hex(&self) -> &str {
        self.hex.get_or_init(|| match self.native {
            ColorFormat::Rgb => {
                let (r, g, b) = self.rgb();
                convert::rgb_to_hex(r, g, b)
            }
            ColorFormat::Hsl => {
                let (h, s, l) = self.hsl();
                convert::hsl_to_hex(h, s, l)
            }
            // A hex-native model always has its cell populated.
            ColorFormat::Hex => String::new(),
        })
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> Triple {
        *self.rgb.get_or_init(|| match self.native {
            ColorFormat::Hex => convert::hex_to_rgb(self.hex()),
            ColorFormat::Hsl => {
                let (h, s, l) = self.hsl();
                convert::round_triple(convert::hsl_to_rgb(h, s, l))
            }
            ColorFormat::Rgb => (0.0, 0.0, 0.0),
        })
    }

    /// Hue, saturation and lightness channels.
    ///
    /// A derived hue that rounds up to 360 is reported as 0.
    pub fn hsl(&self) -> Triple {
        *self.hsl.get_or_init(|| {
            let (h, s, l) = match self.native {
                ColorFormat::Hex => convert::round_triple(convert::hex_to_hsl(self.hex())),
                ColorFormat::Rgb => {
                    let (r, g, b) = self.rgb();
                    convert::round_triple(convert::rgb_to_hsl(r, g, b))
                }
                ColorFormat::Hsl => (0.0, 0.0, 0.0),
            };
            (if h >= 360.0 { h - 360.0 } else { h }, s, l)
        })
    }

    /// Hue in degrees.
    pub fn hue(&self) -> f64 {
        self.hsl().0
    }

    /// `#rrggbb`.
    pub fn as_hex(&self) -> String {
        format!("#{}", self.hex())
    }

    /// `rgb(r,g,b)` without spaces.
    pub fn as_rgb(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("rgb({r},{g},{b})")
    }

    /// `hsl(h,s%,l%)` without spaces.
    pub fn as_hsl(&self) -> String {
        let (h, s, l) = self.hsl();
        format!("hsl({h},{s}%,{l}%)")
    }

    /// Render in the given format.
    pub fn format_as(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.as_hex(),
            ColorFormat::Rgb => self.as_rgb(),
            ColorFormat::Hsl => self.as_hsl(),
        }
    }

    /// Compare by hex representation.
    pub fn equals(&self, other: &Self) -> bool {
        self.hex() == other.hex()
    }
}

impl PartialEq for ColorModel {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ColorModel {}

impl Default for ColorModel {
    fn default() -> Self {
        Self::from_hex("000000")
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

impl FromStr for ColorModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse `name(a,b,c)` after dropping whitespace and the `ignored` characters.
fn parse_function(s: &str, name: &str, ignored: &[char]) -> Result<Triple> {
    let invalid = || Error::InvalidColorString(s.to_string());

    let compact: String = s
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !ignored.contains(c))
        .collect();
    let body = compact
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let mut values = body.split(',').map(|token| {
        token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(invalid)
    });
    match (values.next(), values.next(), values.next(), values.next()) {
        (Some(a), Some(b), Some(c), None) => Ok((a?, b?, c?)),
        _ => Err(invalid()),
    }
}
