//! Saturation/lightness well for a single hue.

use tracing::debug;

use super::ring::SelectionArea;
use crate::color::{ColorModel, Rgba};
use crate::error::Result;
use crate::geometry::Point;
use crate::gradient::GradientSurface;
use crate::search::nearest_point_to_color;

/// A color well: hue fill washed to white on the left and to black at the
/// bottom, with a ring marking the selected color.
#[derive(Debug, Clone)]
pub struct ColorWell {
    area: SelectionArea,
    fill_hue: f64,
    selected: ColorModel,
}

impl ColorWell {
    /// Well at `origin` filled with `fill_hue`, ring on the sample nearest
    /// `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// if either dimension is zero.
    pub fn new(
        origin: Point,
        width: u32,
        height: u32,
        fill_hue: f64,
        initial: &ColorModel,
    ) -> Result<Self> {
        let area = SelectionArea::new(origin, width, height, GradientSurface::color_well(fill_hue))?;
        let mut well = Self {
            area,
            fill_hue,
            selected: initial.clone(),
        };
        well.select_color(initial)?;
        Ok(well)
    }

    /// Surface, field and ring.
    #[must_use]
    pub const fn area(&self) -> &SelectionArea {
        &self.area
    }

    /// Hue of the current fill.
    #[must_use]
    pub const fn fill_hue(&self) -> f64 {
        self.fill_hue
    }

    /// Selected color.
    #[must_use]
    pub const fn selected_color(&self) -> &ColorModel {
        &self.selected
    }

    /// Start dragging at `point`; the sampled color if the ring moved.
    pub fn mouse_down(&mut self, point: Point) -> Result<Option<ColorModel>> {
        self.area.press();
        self.drag_to(point)
    }

    /// Continue a drag; does nothing unless a drag is in progress.
    pub fn mouse_move(&mut self, point: Point) -> Result<Option<ColorModel>> {
        if !self.area.ring().is_dragging() {
            return Ok(None);
        }
        self.drag_to(point)
    }

    /// End a drag.
    pub fn mouse_up(&mut self) {
        self.area.release();
    }

    fn drag_to(&mut self, point: Point) -> Result<Option<ColorModel>> {
        let moved = self.area.move_ring_to(point)?;
        if let Some(color) = &moved {
            self.selected = color.clone();
        }
        Ok(moved)
    }

    /// Refill with pure `hue` and return the color now under the ring.
    pub fn set_fill_hue(&mut self, hue: f64) -> Result<ColorModel> {
        self.fill_hue = hue;
        self.area.refill(Rgba::from_hsl(hue, 100.0, 50.0), hue);
        let color = self.area.refresh_ring_color()?;
        debug!(hue, color = %color, "refilled color well");
        self.selected = color.clone();
        Ok(color)
    }

    /// Select `color` and move the ring to the closest sample.
    ///
    /// The selected color stays `color` even when no sample matches it
    /// exactly. Returns the sampled color if the ring moved.
    pub fn select_color(&mut self, color: &ColorModel) -> Result<Option<ColorModel>> {
        self.selected = color.clone();
        let target = nearest_point_to_color(self.area.field(), color, self.area.bounds())?;
        let moved = self.area.set_ring(target)?;
        debug!(color = %color, x = target.x, y = target.y, "moved well ring to color");
        Ok(moved)
    }
}
