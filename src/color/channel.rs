//! Manual entry of individual color channels.
//!
//! Each [`ChannelInput`] keeps the last accepted value for one channel. Typed
//! text is validated against the channel's pattern and range; rejected text
//! leaves the previous value in place.

use tracing::debug;

use super::{Channels, ColorFormat, ColorModel};
use crate::error::{Error, Result};

/// A single editable channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    /// The whole hex string.
    Hex,
    /// Red.
    R,
    /// Green.
    G,
    /// Blue.
    B,
    /// Hue.
    H,
    /// Saturation.
    S,
    /// Lightness.
    L,
}

impl ColorChannel {
    /// Channels making up `format`, in display order.
    #[must_use]
    pub const fn for_format(format: ColorFormat) -> &'static [Self] {
        match format {
            ColorFormat::Hex => &[Self::Hex],
            ColorFormat::Rgb => &[Self::R, Self::G, Self::B],
            ColorFormat::Hsl => &[Self::H, Self::S, Self::L],
        }
    }

    /// Format this channel belongs to.
    #[must_use]
    pub const fn format(self) -> ColorFormat {
        match self {
            Self::Hex => ColorFormat::Hex,
            Self::R | Self::G | Self::B => ColorFormat::Rgb,
            Self::H | Self::S | Self::L => ColorFormat::Hsl,
        }
    }

    /// Maximum number of characters accepted by the input box.
    #[must_use]
    pub const fn max_len(self) -> usize {
        match self {
            Self::Hex => 7,
            Self::R | Self::G | Self::B | Self::H => 3,
            // up to 3 digits plus '%'
            Self::S | Self::L => 4,
        }
    }

    /// Read this channel's value out of `color`.
    pub fn value_of(self, color: &ColorModel) -> ChannelValue {
        match self {
            Self::Hex => ChannelValue::Hex(color.hex().to_string()),
            Self::R => ChannelValue::Number(color.rgb().0),
            Self::G => ChannelValue::Number(color.rgb().1),
            Self::B => ChannelValue::Number(color.rgb().2),
            Self::H => ChannelValue::Number(color.hsl().0),
            Self::S => ChannelValue::Number(color.hsl().1),
            Self::L => ChannelValue::Number(color.hsl().2),
        }
    }

    /// Validate typed text, returning the value it denotes.
    pub fn parse_input(self, text: &str) -> Result<ChannelValue> {
        let rejected = || Error::RejectedInput {
            channel: self,
            value: text.to_string(),
        };

        match self {
            Self::Hex => {
                let digits = text.strip_prefix('#').ok_or_else(rejected)?.to_lowercase();
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(rejected());
                }
                // 'ff' => '0000ff'
                let padded = format!("000000{digits}");
                Ok(ChannelValue::Hex(padded[padded.len() - 6..].to_string()))
            }
            Self::R | Self::G | Self::B => {
                parse_bounded(text, |v| v <= 255).ok_or_else(rejected)
            }
            Self::H => parse_bounded(text, |v| v < 360).ok_or_else(rejected),
            Self::S | Self::L => {
                let number = text.strip_suffix('%').ok_or_else(rejected)?;
                parse_bounded(number, |v| v <= 100).ok_or_else(rejected)
            }
        }
    }
}

/// Digits only, within the channel's range.
fn parse_bounded(text: &str, in_range: impl Fn(u64) -> bool) -> Option<ChannelValue> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digit strings too long for u64 are out of range anyway.
    let value = text.parse::<u64>().ok().filter(|&v| in_range(v))?;
    Some(ChannelValue::Number(value as f64))
}

/// The value held by a channel input.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelValue {
    /// Six hex digits.
    Hex(String),
    /// A numeric channel.
    Number(f64),
}

impl ChannelValue {
    fn number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Hex(_) => 0.0,
        }
    }
}

/// One channel's editable value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInput {
    channel: ColorChannel,
    value: ChannelValue,
}

impl ChannelInput {
    /// Input for `channel` showing the value from `color`.
    pub fn new(channel: ColorChannel, color: &ColorModel) -> Self {
        Self {
            channel,
            value: channel.value_of(color),
        }
    }

    /// The channel this input edits.
    #[must_use]
    pub const fn channel(&self) -> ColorChannel {
        self.channel
    }

    /// The last accepted value.
    #[must_use]
    pub const fn value(&self) -> &ChannelValue {
        &self.value
    }

    /// Replace the value with the one from `color`; returns whether it changed.
    pub fn set_color(&mut self, color: &ColorModel) -> bool {
        let value = self.channel.value_of(color);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Accept typed text, or reject it and keep the previous value.
    pub fn update(&mut self, text: &str) -> Result<()> {
        match self.channel.parse_input(text) {
            Ok(value) => {
                self.value = value;
                Ok(())
            }
            Err(err) => {
                debug!(channel = ?self.channel, text, "rejected manual channel input");
                Err(err)
            }
        }
    }

    /// Text shown in the input box: `#rrggbb`, `n` or `n%`.
    #[must_use]
    pub fn display_value(&self) -> String {
        match (&self.value, self.channel) {
            (ChannelValue::Hex(hex), _) => format!("#{hex}"),
            (ChannelValue::Number(n), ColorChannel::S | ColorChannel::L) => format!("{n}%"),
            (ChannelValue::Number(n), _) => format!("{n}"),
        }
    }
}

/// The inputs for one color format.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelGroup {
    format: ColorFormat,
    inputs: Vec<ChannelInput>,
}

impl ChannelGroup {
    /// Inputs for every channel of `format`, initialized from `color`.
    pub fn new(format: ColorFormat, color: &ColorModel) -> Self {
        let inputs = ColorChannel::for_format(format)
            .iter()
            .map(|&channel| ChannelInput::new(channel, color))
            .collect();
        Self { format, inputs }
    }

    /// Format edited by this group.
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        self.format
    }

    /// The channel inputs in display order.
    #[must_use]
    pub fn inputs(&self) -> &[ChannelInput] {
        &self.inputs
    }

    /// Color formed by the current channel values.
    pub fn color(&self) -> ColorModel {
        let number = |i: usize| self.inputs.get(i).map_or(0.0, |input| input.value.number());
        match self.format {
            ColorFormat::Hex => {
                let hex = match self.inputs.first().map(ChannelInput::value) {
                    Some(ChannelValue::Hex(hex)) => hex.clone(),
                    _ => String::new(),
                };
                ColorModel::from_channels(Channels::Hex(hex))
            }
            ColorFormat::Rgb => {
                ColorModel::from_channels(Channels::Rgb(number(0), number(1), number(2)))
            }
            ColorFormat::Hsl => {
                ColorModel::from_channels(Channels::Hsl(number(0), number(1), number(2)))
            }
        }
    }

    /// Refresh every input from `color`.
    pub fn set_color(&mut self, color: &ColorModel) {
        for input in &mut self.inputs {
            input.set_color(color);
        }
    }

    /// Route typed text to `channel`.
    ///
    /// Text for a channel outside this group is rejected.
    pub fn update(&mut self, channel: ColorChannel, text: &str) -> Result<()> {
        self.inputs
            .iter_mut()
            .find(|input| input.channel == channel)
            .ok_or_else(|| Error::RejectedInput {
                channel,
                value: text.to_string(),
            })?
            .update(text)
    }
}
