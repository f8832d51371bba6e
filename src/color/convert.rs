//! Pure conversions between hexadecimal, RGB and HSL triples.
//!
//! RGB channels are in `[0, 255]`, hue in degrees `[0, 360)`, saturation and
//! lightness in percent `[0, 100]`. None of these functions round their
//! output except [`hsl_to_hex`], which rounds RGB before hex encoding.
//!
//! # References
//!
//! - Joblove, G. H., & Greenberg, D. (1978). "Color spaces for computer graphics."
//!   *SIGGRAPH '78*, 20-25.

/// A color triple, either `(r, g, b)` or `(h, s, l)`.
pub type Triple = (f64, f64, f64);

/// Round to the nearest integer, with halves rounded toward positive infinity.
///
/// `f64::round` rounds halves away from zero, which disagrees for negative
/// halves; pickers round `-0.5` to `-0`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round each component of a triple with [`round_half_up`].
#[must_use]
pub fn round_triple((a, b, c): Triple) -> Triple {
    (round_half_up(a), round_half_up(b), round_half_up(c))
}

/// Parse hex digits as a 24-bit integer and split it into RGB bytes.
///
/// Parsing stops at the first non-hex character; an input with no leading hex
/// digit reads as zero. Longer inputs wrap at 32 bits before the bytes are
/// extracted.
///
/// # Example
///
/// ```
/// use trueno_picker::color::convert::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("ff0000"), (255.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Triple {
    let value = hex
        .trim_start()
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, digit| acc.wrapping_mul(16).wrapping_add(digit));

    (
        f64::from((value >> 16) & 0xff),
        f64::from((value >> 8) & 0xff),
        f64::from(value & 0xff),
    )
}

/// Encode RGB channels as six lowercase hex digits (no `#`).
///
/// Fractional channels are rounded and out-of-range channels clamped to
/// `[0, 255]` so the result is always a valid 6-digit string.
///
/// # Example
///
/// ```
/// use trueno_picker::color::convert::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(0.0, 255.0, 0.0), "00ff00");
/// ```
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let byte = |channel: f64| round_half_up(channel).clamp(0.0, 255.0) as u8;
    format!("{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
}

/// Convert HSL to unrounded RGB using the chroma/hue-sector construction.
///
/// Sector one is `0 <= h/60 <= 1`; sectors two to five are
/// `k-1 < h/60 <= k`; everything else falls into sector six.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Triple {
    let h = h / 60.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b, offset) = if s == 0.0 {
        (l, l, l, 0.0)
    } else {
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let offset = l - chroma / 2.0;

        let (r, g, b) = if (0.0..=1.0).contains(&h) {
            (chroma, x, 0.0)
        } else if 1.0 < h && h <= 2.0 {
            (x, chroma, 0.0)
        } else if 2.0 < h && h <= 3.0 {
            (0.0, chroma, x)
        } else if 3.0 < h && h <= 4.0 {
            (0.0, x, chroma)
        } else if 4.0 < h && h <= 5.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        (r, g, b, offset)
    };

    let channel = |value: f64| ((value + offset) * 255.0).clamp(0.0, 255.0);
    (channel(r), channel(g), channel(b))
}

/// Convert RGB to unrounded HSL.
///
/// Achromatic input (`max == min`) yields hue and saturation zero.
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Triple {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l * 100.0);
    }

    let diff = max - min;
    let sector = if max == r {
        (g - b) / diff
    } else if max == g {
        (b - r) / diff + 2.0
    } else {
        (r - g) / diff + 4.0
    };
    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    if h >= 360.0 {
        h -= 360.0;
    }

    let s = diff / (1.0 - (2.0 * l - 1.0).abs()) * 100.0;
    (h, s.clamp(0.0, 100.0), (l * 100.0).clamp(0.0, 100.0))
}

/// Convert HSL to hex, rounding the intermediate RGB channels.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = round_triple(hsl_to_rgb(h, s, l));
    rgb_to_hex(r, g, b)
}

/// Convert hex to unrounded HSL through RGB.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Triple {
    let (r, g, b) = hex_to_rgb(hex);
    rgb_to_hsl(r, g, b)
}
