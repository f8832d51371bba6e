//! Horizontal hue slider.

use tracing::debug;

use super::ring::SelectionArea;
use crate::color::ColorModel;
use crate::error::Result;
use crate::geometry::Point;
use crate::gradient::GradientSurface;
use crate::search::nearest_hue;

fn pure_hue(hue: f64) -> ColorModel {
    ColorModel::from_hsl(hue, 100.0, 50.0)
}

/// Hue strip with a ring that only moves along x.
#[derive(Debug, Clone)]
pub struct HueSlider {
    area: SelectionArea,
    color: ColorModel,
}

impl HueSlider {
    /// Slider at `origin` painted through `stops`, ring on the hue of `initial`.
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions or invalid stops.
    pub fn new(
        origin: Point,
        width: u32,
        height: u32,
        stops: &[(f64, f64)],
        initial: &ColorModel,
    ) -> Result<Self> {
        let area = SelectionArea::new(origin, width, height, GradientSurface::hue_strip(stops)?)?;
        let mut slider = Self {
            area,
            color: pure_hue(initial.hue()),
        };
        slider.set_color(initial)?;
        Ok(slider)
    }

    /// Surface, field and ring.
    #[must_use]
    pub const fn area(&self) -> &SelectionArea {
        &self.area
    }

    /// Current hue color.
    #[must_use]
    pub const fn color(&self) -> &ColorModel {
        &self.color
    }

    /// Set the hue from `color` at full saturation and half lightness.
    ///
    /// The ring moves to the strip column of the closest hue unless it
    /// already shows that hue. If it moves, the slider adopts the sampled
    /// color and returns it.
    pub fn set_color(&mut self, color: &ColorModel) -> Result<Option<ColorModel>> {
        let hue = color.hue();
        self.color = pure_hue(hue);
        if hue == self.area.ring().color().hue() {
            return Ok(None);
        }

        let column = nearest_hue(self.area.field(), hue)?;
        let x = self.area.bounds().left() + f64::from(column);
        debug!(hue, column, "moving hue slider ring");
        let moved = self.area.set_ring_x(x)?;
        Ok(moved.map(|sampled| self.adopt(sampled)))
    }

    /// Start dragging at `point`; the new hue color if the ring moved.
    pub fn mouse_down(&mut self, point: Point) -> Result<Option<ColorModel>> {
        self.area.press();
        self.slide_to(point)
    }

    /// Continue a drag; does nothing unless a drag is in progress.
    pub fn mouse_move(&mut self, point: Point) -> Result<Option<ColorModel>> {
        if !self.area.ring().is_dragging() {
            return Ok(None);
        }
        self.slide_to(point)
    }

    /// End a drag.
    pub fn mouse_up(&mut self) {
        self.area.release();
    }

    fn slide_to(&mut self, point: Point) -> Result<Option<ColorModel>> {
        let moved = self.area.slide_ring_to(point)?;
        Ok(moved.map(|sampled| self.adopt(sampled)))
    }

    fn adopt(&mut self, sampled: ColorModel) -> ColorModel {
        self.color = sampled;
        self.color.clone()
    }
}
