//! Gradient surfaces painted into framebuffers.
//!
//! A [`GradientSurface`] is a solid fill followed by any number of linear
//! gradients composited over it, mirroring how the color well and hue strip
//! are drawn: the well is a pure hue overlaid with a white (left to right)
//! and a black (bottom to top) fade, the strip is an opaque hue sweep.
//!
//! Gradient positions are evaluated at pixel centers.

use tracing::trace;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;

/// Default hue-strip stops as `(offset, hue)` pairs.
pub const HUE_STRIP_STOPS: [(f64, f64); 7] = [
    (0.01, 0.0),
    (0.17, 300.0),
    (0.33, 240.0),
    (0.5, 180.0),
    (0.67, 120.0),
    (0.83, 60.0),
    (0.99, 0.0),
];

/// A color at a position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Color at this position.
    pub color: Rgba,
}

impl ColorStop {
    /// Create a new stop.
    #[must_use]
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Axis a gradient runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Offset 0 at the left edge, 1 at the right edge.
    LeftToRight,
    /// Offset 0 at the bottom edge, 1 at the top edge.
    BottomToTop,
}

/// Linear gradient over straight (non-premultiplied) RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    stops: Vec<ColorStop>,
    direction: Direction,
}

impl LinearGradient {
    /// Create a gradient from stops in ascending offset order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no stops, an offset lies outside
    /// `[0, 1]`, or offsets decrease.
    pub fn new(stops: Vec<ColorStop>, direction: Direction) -> Result<Self> {
        if stops.is_empty() {
            return Err(Error::InvalidGradient("gradient requires at least one stop".to_string()));
        }
        if let Some(stop) = stops.iter().find(|s| !(0.0..=1.0).contains(&s.offset)) {
            return Err(Error::InvalidGradient(format!(
                "stop offset {} outside [0, 1]",
                stop.offset
            )));
        }
        if stops.windows(2).any(|pair| pair[1].offset < pair[0].offset) {
            return Err(Error::InvalidGradient("stop offsets must not decrease".to_string()));
        }
        Ok(Self { stops, direction })
    }

    /// Opaque hue sweep through `(offset, hue)` stops at full saturation.
    pub fn hue_strip(stops: &[(f64, f64)]) -> Result<Self> {
        let stops = stops
            .iter()
            .map(|&(offset, hue)| ColorStop::new(offset, Rgba::from_hsl(hue, 100.0, 50.0)))
            .collect();
        Self::new(stops, Direction::LeftToRight)
    }

    /// White fading from opaque (left) to transparent (right).
    #[must_use]
    pub fn white_fade() -> Self {
        Self {
            stops: vec![
                ColorStop::new(0.01, Rgba::WHITE),
                ColorStop::new(0.99, Rgba::WHITE.with_alpha(0)),
            ],
            direction: Direction::LeftToRight,
        }
    }

    /// Black fading from opaque (bottom) to transparent (top).
    #[must_use]
    pub fn black_fade() -> Self {
        Self {
            stops: vec![
                ColorStop::new(0.01, Rgba::BLACK),
                ColorStop::new(0.99, Rgba::BLACK.with_alpha(0)),
            ],
            direction: Direction::BottomToTop,
        }
    }

    /// The gradient's stops.
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at offset `t`, clamped to the first/last stop outside their range.
    #[must_use]
    pub fn color_at(&self, t: f64) -> Rgba {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgba::TRANSPARENT,
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }

        self.stops
            .windows(2)
            .find(|pair| t <= pair[1].offset)
            .map_or(last.color, |pair| {
                let span = pair[1].offset - pair[0].offset;
                if span <= 0.0 {
                    pair[1].color
                } else {
                    pair[0].color.lerp(pair[1].color, (t - pair[0].offset) / span)
                }
            })
    }

    /// Offset of a pixel center for a surface of the given size.
    fn offset_of(&self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        match self.direction {
            Direction::LeftToRight => (f64::from(x) + 0.5) / f64::from(width),
            Direction::BottomToTop => {
                (f64::from(height) - (f64::from(y) + 0.5)) / f64::from(height)
            }
        }
    }

    /// Composite this gradient over every pixel of `fb`.
    pub fn paint(&self, fb: &mut Framebuffer) {
        let (width, height) = (fb.width(), fb.height());
        for y in 0..height {
            for x in 0..width {
                let color = self.color_at(self.offset_of(x, y, width, height));
                fb.blend_pixel(x, y, color);
            }
        }
    }
}

/// A solid fill with gradients layered on top.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSurface {
    fill: Rgba,
    gradients: Vec<LinearGradient>,
}

impl GradientSurface {
    /// Surface with a fill color and no gradients.
    #[must_use]
    pub const fn new(fill: Rgba) -> Self {
        Self {
            fill,
            gradients: Vec::new(),
        }
    }

    /// Append gradients painted after the fill, in order.
    #[must_use]
    pub fn with_gradients(mut self, gradients: impl IntoIterator<Item = LinearGradient>) -> Self {
        self.gradients.extend(gradients);
        self
    }

    /// Hue strip: red fill under the hue sweep.
    pub fn hue_strip(stops: &[(f64, f64)]) -> Result<Self> {
        Ok(Self::new(Rgba::from_hsl(0.0, 100.0, 50.0))
            .with_gradients([LinearGradient::hue_strip(stops)?]))
    }

    /// Color well for `hue`: pure hue under the white and black fades.
    #[must_use]
    pub fn color_well(hue: f64) -> Self {
        Self::new(Rgba::from_hsl(hue, 100.0, 50.0))
            .with_gradients([LinearGradient::white_fade(), LinearGradient::black_fade()])
    }

    /// The solid fill.
    #[must_use]
    pub const fn fill(&self) -> Rgba {
        self.fill
    }

    /// Replace the fill, keeping the gradients.
    pub fn set_fill(&mut self, fill: Rgba) {
        self.fill = fill;
    }

    /// Repaint `fb` from scratch: fill, then each gradient.
    pub fn paint(&self, fb: &mut Framebuffer) {
        trace!(
            width = fb.width(),
            height = fb.height(),
            gradients = self.gradients.len(),
            "painting gradient surface"
        );
        fb.clear(self.fill);
        for gradient in &self.gradients {
            gradient.paint(fb);
        }
    }
}

/// Paint the default hue strip into `fb`.
pub fn paint_hue_strip(fb: &mut Framebuffer) -> Result<()> {
    GradientSurface::hue_strip(&HUE_STRIP_STOPS)?.paint(fb);
    Ok(())
}

/// Paint the color well for `hue` into `fb`.
pub fn paint_color_well(fb: &mut Framebuffer, hue: f64) {
    GradientSurface::color_well(hue).paint(fb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_hue_strip_ends_red() {
        let mut fb = Framebuffer::new(180, 1).unwrap();
        paint_hue_strip(&mut fb).unwrap();
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(fb.get_pixel(179, 0), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(fb.get_pixel(90, 0).map(|px| (px.r, px.g)), Some((0, 255)));
    }

    #[test]
    fn test_paint_color_well_matches_surface() {
        let mut direct = Framebuffer::new(40, 20).unwrap();
        paint_color_well(&mut direct, 75.0);
        let mut via_surface = Framebuffer::new(40, 20).unwrap();
        GradientSurface::color_well(75.0).paint(&mut via_surface);
        assert_eq!(direct.pixels(), via_surface.pixels());
    }

    #[test]
    fn test_gradient_rejects_bad_stops() {
        assert!(LinearGradient::new(vec![], Direction::LeftToRight).is_err());
        assert!(LinearGradient::new(
            vec![ColorStop::new(1.5, Rgba::WHITE)],
            Direction::LeftToRight
        )
        .is_err());
        assert!(LinearGradient::new(
            vec![ColorStop::new(0.6, Rgba::WHITE), ColorStop::new(0.4, Rgba::BLACK)],
            Direction::LeftToRight
        )
        .is_err());
    }

    #[test]
    fn test_color_at_clamps_and_interpolates() {
        let gradient = LinearGradient::new(
            vec![ColorStop::new(0.25, Rgba::BLACK), ColorStop::new(0.75, Rgba::WHITE)],
            Direction::LeftToRight,
        )
        .unwrap();
        assert_eq!(gradient.color_at(0.0), Rgba::BLACK);
        assert_eq!(gradient.color_at(1.0), Rgba::WHITE);
        assert_eq!(gradient.color_at(0.5), Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_hue_strip_stops() {
        let gradient = LinearGradient::hue_strip(&HUE_STRIP_STOPS).unwrap();
        assert_eq!(gradient.stops().len(), 7);
        assert_eq!(gradient.color_at(0.0), Rgba::rgb(255, 0, 0));
        assert_eq!(gradient.color_at(0.5), Rgba::rgb(0, 255, 255));
        assert_eq!(gradient.color_at(0.67), Rgba::rgb(0, 255, 0));
    }

    #[test]
    fn test_color_well_corners() {
        let mut fb = Framebuffer::new(100, 50).unwrap();
        GradientSurface::color_well(240.0).paint(&mut fb);

        // top-right keeps the pure hue
        assert_eq!(fb.get_pixel(99, 0), Some(Rgba::rgb(0, 0, 255)));
        // top-left is washed out to white
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
        // bottom row is black
        assert_eq!(fb.get_pixel(50, 49), Some(Rgba::BLACK));
    }

    #[test]
    fn test_set_fill_keeps_gradients() {
        let mut surface = GradientSurface::color_well(0.0);
        surface.set_fill(Rgba::from_hsl(120.0, 100.0, 50.0));
        let mut fb = Framebuffer::new(100, 50).unwrap();
        surface.paint(&mut fb);
        assert_eq!(fb.get_pixel(99, 0), Some(Rgba::rgb(0, 255, 0)));
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
    }
}
