//! Per-pixel HSL fields sampled from rendered gradient surfaces.
//!
//! A [`PaletteField`] holds one rounded HSL triple per raster pixel in
//! row-major order. It is rebuilt wholesale when the surface is resized or
//! refilled, or patched in place when only the hue of the fill changed.
//!
//! Pending work can be recorded with [`PaletteField::mark_stale`] and
//! [`PaletteField::schedule_hue_patch`] and applied later by
//! [`PaletteField::sync`], full resample first.

use tracing::debug;

use crate::color::convert::{rgb_to_hsl, round_triple, Triple};
use crate::color::ColorModel;
use crate::error::{Error, Result};
use crate::framebuffer::Raster;
use crate::geometry::{clamp_to_field, point_to_index, Point, Rect};

/// Row-major HSL samples of a raster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteField {
    width: u32,
    height: u32,
    samples: Vec<Triple>,
    needs_full_resample: bool,
    needs_hue_patch: bool,
    pending_hue: f64,
}

impl PaletteField {
    /// Sample `width * height` RGBA pixels from `raster`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RasterLengthMismatch`] if `raster` holds fewer than
    /// `4 * width * height` bytes.
    pub fn resample(raster: &[u8], width: u32, height: u32) -> Result<Self> {
        Ok(Self::from_raster(&Raster::new(raster, width, height)?))
    }

    /// Sample every pixel of a validated raster view.
    #[must_use]
    pub fn from_raster(raster: &Raster<'_>) -> Self {
        let samples: Vec<Triple> = raster
            .pixels()
            .map(|px| {
                round_triple(rgb_to_hsl(
                    f64::from(px.r),
                    f64::from(px.g),
                    f64::from(px.b),
                ))
            })
            .collect();
        debug!(
            width = raster.width(),
            height = raster.height(),
            samples = samples.len(),
            "resampled palette field"
        );

        Self {
            width: raster.width(),
            height: raster.height(),
            samples,
            ..Self::default()
        }
    }

    /// Build a field from precomputed samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `samples.len() != width * height`.
    pub fn from_samples(width: u32, height: u32, samples: Vec<Triple>) -> Result<Self> {
        if samples.len() != (width as usize) * (height as usize) {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            samples,
            ..Self::default()
        })
    }

    /// Width in samples.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in samples.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether the field has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in row-major order.
    #[must_use]
    pub fn samples(&self) -> &[Triple] {
        &self.samples
    }

    /// Whether a full resample is pending.
    #[must_use]
    pub const fn needs_full_resample(&self) -> bool {
        self.needs_full_resample
    }

    /// Whether a hue patch is pending.
    #[must_use]
    pub const fn needs_hue_patch(&self) -> bool {
        self.needs_hue_patch
    }

    /// Overwrite the hue of every chromatic sample with `target_hue`.
    ///
    /// Samples whose hue is exactly zero are left alone so white, black and
    /// gray stay neutral. A chromatic sample that rounded to hue zero is
    /// skipped as well. Saturation, lightness and dimensions never change.
    pub fn patch_hue(&mut self, target_hue: f64) {
        let mut patched = 0usize;
        for sample in &mut self.samples {
            if sample.0 != 0.0 {
                sample.0 = target_hue;
                patched += 1;
            }
        }
        debug!(target_hue, patched, total = self.samples.len(), "patched palette hue");
    }

    /// Record that the backing surface was resized or refilled.
    pub fn mark_stale(&mut self) {
        self.needs_full_resample = true;
    }

    /// Record that the surface's fill hue changed to `target_hue`.
    pub fn schedule_hue_patch(&mut self, target_hue: f64) {
        self.needs_hue_patch = true;
        self.pending_hue = target_hue;
    }

    /// Apply pending work against the current surface pixels.
    ///
    /// A pending full resample replaces every sample (and the dimensions)
    /// from `raster`; a pending hue patch is applied afterwards. Both flags
    /// are cleared.
    pub fn sync(&mut self, raster: &Raster<'_>) {
        if self.needs_full_resample {
            let resampled = Self::from_raster(raster);
            self.width = resampled.width;
            self.height = resampled.height;
            self.samples = resampled.samples;
            self.needs_full_resample = false;
        }
        if self.needs_hue_patch {
            self.patch_hue(self.pending_hue);
            self.needs_hue_patch = false;
        }
    }

    /// HSL triple at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyField`] for a field without samples and
    /// [`Error::OutOfField`] for coordinates past the edges.
    pub fn sample_at(&self, x: u32, y: u32) -> Result<Triple> {
        if self.is_empty() {
            return Err(Error::EmptyField);
        }
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfField {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Ok(self.samples[index])
    }

    /// Color under an absolute `point` of a field drawn at `bounds`.
    ///
    /// The point is clamped into the bounds first and rounded to the nearest
    /// sample; rounding up onto the far edge is pulled back to the last
    /// column/row.
    pub fn color_at(&self, point: Point, bounds: Rect) -> Result<ColorModel> {
        if self.is_empty() {
            return Err(Error::EmptyField);
        }
        let (col, row) = point_to_index(clamp_to_field(point, bounds), bounds);
        let (h, s, l) = self.sample_at(col.min(self.width - 1), row.min(self.height - 1))?;
        Ok(ColorModel::from_hsl(h, s, l))
    }
}
