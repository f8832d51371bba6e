//! Selection ring and the gradient area it moves over.

use crate::color::{ColorModel, Rgba};
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{clamp_to_field, Point, Rect};
use crate::gradient::GradientSurface;
use crate::palette::PaletteField;

/// Marker over a palette: where it sits, whether it is being dragged and the
/// color last sampled under it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRing {
    position: Point,
    dragging: bool,
    color: ColorModel,
}

impl SelectionRing {
    /// Ring at `position` showing `color`.
    #[must_use]
    pub const fn new(position: Point, color: ColorModel) -> Self {
        Self {
            position,
            dragging: false,
            color,
        }
    }

    /// Current position in client coordinates.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Left edge (the x coordinate).
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.position.x
    }

    /// Top edge (the y coordinate).
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.position.y
    }

    /// Color last sampled under the ring.
    #[must_use]
    pub const fn color(&self) -> &ColorModel {
        &self.color
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Begin a drag.
    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    /// End a drag.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Move to `position`; returns whether it moved.
    pub fn set(&mut self, position: Point) -> bool {
        if position == self.position {
            return false;
        }
        self.position = position;
        true
    }

    /// Move horizontally to `x`; returns whether it moved.
    pub fn set_x(&mut self, x: f64) -> bool {
        if x == self.position.x {
            return false;
        }
        self.position.x = x;
        true
    }

    /// Move horizontally by `dx`; returns whether it moved.
    pub fn shift_x(&mut self, dx: f64) -> bool {
        self.set_x(self.position.x + dx)
    }

    /// Replace the color unless it is hex-equal to the current one.
    pub fn update_color(&mut self, color: ColorModel) -> bool {
        if color.equals(&self.color) {
            return false;
        }
        self.color = color;
        true
    }
}

/// A painted gradient surface, its sampled field and a ring on top.
#[derive(Debug, Clone)]
pub struct SelectionArea {
    bounds: Rect,
    surface: GradientSurface,
    framebuffer: Framebuffer,
    field: PaletteField,
    ring: SelectionRing,
}

impl SelectionArea {
    /// Paint `surface` at `origin`, sample it and park the ring on the
    /// top-left corner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// if either dimension is zero.
    pub fn new(origin: Point, width: u32, height: u32, surface: GradientSurface) -> Result<Self> {
        let bounds = Rect::at(origin, width, height);
        let mut framebuffer = Framebuffer::new(width, height)?;
        surface.paint(&mut framebuffer);
        let field = PaletteField::from_raster(&framebuffer.as_raster());
        let color = field.color_at(bounds.origin(), bounds)?;

        Ok(Self {
            bounds,
            surface,
            framebuffer,
            field,
            ring: SelectionRing::new(bounds.origin(), color),
        })
    }

    /// Bounds in client coordinates.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The sampled field.
    #[must_use]
    pub const fn field(&self) -> &PaletteField {
        &self.field
    }

    /// The painted pixels.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// The ring.
    #[must_use]
    pub const fn ring(&self) -> &SelectionRing {
        &self.ring
    }

    /// The surface description.
    #[must_use]
    pub const fn surface(&self) -> &GradientSurface {
        &self.surface
    }

    pub(crate) fn press(&mut self) {
        self.ring.start_drag();
    }

    pub(crate) fn release(&mut self) {
        self.ring.end_drag();
    }

    /// Resample the color under the ring and return the ring's color.
    pub(crate) fn refresh_ring_color(&mut self) -> Result<ColorModel> {
        let sampled = self.field.color_at(self.ring.position(), self.bounds)?;
        self.ring.update_color(sampled);
        Ok(self.ring.color().clone())
    }

    /// Put the ring at `position`; the refreshed color if it moved.
    pub(crate) fn set_ring(&mut self, position: Point) -> Result<Option<ColorModel>> {
        if self.ring.set(position) {
            self.refresh_ring_color().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Put the ring at column `x`; the refreshed color if it moved.
    pub(crate) fn set_ring_x(&mut self, x: f64) -> Result<Option<ColorModel>> {
        if self.ring.set_x(x) {
            self.refresh_ring_color().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Move the ring to the field point nearest `point`.
    pub(crate) fn move_ring_to(&mut self, point: Point) -> Result<Option<ColorModel>> {
        self.set_ring(clamp_to_field(point, self.bounds))
    }

    /// Shift the ring horizontally to the field column nearest `point.x`.
    pub(crate) fn slide_ring_to(&mut self, point: Point) -> Result<Option<ColorModel>> {
        let target = clamp_to_field(point, self.bounds);
        if self.ring.shift_x(target.x - self.ring.left()) {
            self.refresh_ring_color().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Repaint with a new fill and bring the field up to date, patching every
    /// chromatic sample to `hue`.
    pub(crate) fn refill(&mut self, fill: Rgba, hue: f64) {
        self.surface.set_fill(fill);
        self.surface.paint(&mut self.framebuffer);
        self.field.mark_stale();
        self.field.schedule_hue_patch(hue);
        self.field.sync(&self.framebuffer.as_raster());
    }
}
