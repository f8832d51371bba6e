//! UI-free color picker controllers.
//!
//! [`ColorPicker`] wires a [`ColorWell`], a [`HueSlider`] and one
//! [`ChannelGroup`] per format together. Pointer and keyboard input go in as
//! method calls; each call returns a [`PickerUpdate`] describing what a view
//! needs to redraw.
//!
//! A manual entry always wins over the color the visual picker lands on: the
//! well snaps its ring to the closest sample, but the typed value stays
//! selected.
//!
//! # Example
//!
//! ```
//! use trueno_picker::color::ColorChannel;
//! use trueno_picker::config::PickerConfig;
//! use trueno_picker::picker::ColorPicker;
//!
//! let mut picker = ColorPicker::new(&PickerConfig::default()).unwrap();
//! picker.manual_input(ColorChannel::Hex, "#1e90ff").unwrap();
//! assert_eq!(picker.submit(), "#1e90ff");
//! ```

pub mod ring;
pub mod slider;
pub mod well;

use tracing::debug;

use crate::color::{ChannelGroup, ColorChannel, ColorFormat, ColorModel};
use crate::config::PickerConfig;
use crate::error::Result;
use crate::geometry::Point;

pub use ring::{SelectionArea, SelectionRing};
pub use slider::HueSlider;
pub use well::ColorWell;

/// What changed as the result of one picker operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerUpdate {
    /// New selected color, if it changed.
    pub selected: Option<ColorModel>,
    /// New swatch color, if the visual picker reported one.
    pub swatch: Option<ColorModel>,
    /// New well fill hue, if the hue slider moved.
    pub hue: Option<f64>,
}

impl PickerUpdate {
    /// Whether nothing changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_none() && self.swatch.is_none() && self.hue.is_none()
    }

    fn merge(&mut self, later: Self) {
        if later.selected.is_some() {
            self.selected = later.selected;
        }
        if later.swatch.is_some() {
            self.swatch = later.swatch;
        }
        self.hue = later.hue.or(self.hue);
    }
}

const fn slot(format: ColorFormat) -> usize {
    match format {
        ColorFormat::Hex => 0,
        ColorFormat::Rgb => 1,
        ColorFormat::Hsl => 2,
    }
}

/// The complete picker: visual well and slider, manual channel entry and the
/// committed selection.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    well: ColorWell,
    slider: HueSlider,
    groups: [ChannelGroup; 3],
    manual_format: ColorFormat,
    selected: ColorModel,
    swatch: ColorModel,
}

impl ColorPicker {
    /// Build a picker from `config`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`PickerConfig::validate`], or an invalid
    /// gradient error for bad hue stops.
    pub fn new(config: &PickerConfig) -> Result<Self> {
        let initial = config.validate()?;
        let slider = HueSlider::new(
            config.strip_origin,
            config.strip_width,
            config.strip_height,
            &config.hue_stops,
            &initial,
        )?;
        let well = ColorWell::new(
            config.well_origin,
            config.well_width,
            config.well_height,
            slider.color().hue(),
            &initial,
        )?;
        let groups = ColorFormat::ALL.map(|format| ChannelGroup::new(format, &initial));
        debug!(initial = %initial, format = config.manual_format.label(), "created color picker");

        Ok(Self {
            well,
            slider,
            groups,
            manual_format: config.manual_format,
            selected: initial.clone(),
            swatch: initial,
        })
    }

    /// The committed selection.
    #[must_use]
    pub const fn selected_color(&self) -> &ColorModel {
        &self.selected
    }

    /// The color last reported by the visual picker.
    #[must_use]
    pub const fn swatch_color(&self) -> &ColorModel {
        &self.swatch
    }

    /// The color well.
    #[must_use]
    pub const fn well(&self) -> &ColorWell {
        &self.well
    }

    /// The hue slider.
    #[must_use]
    pub const fn slider(&self) -> &HueSlider {
        &self.slider
    }

    /// Channel inputs for all three formats.
    #[must_use]
    pub const fn groups(&self) -> &[ChannelGroup; 3] {
        &self.groups
    }

    /// Channel inputs for `format`.
    #[must_use]
    pub const fn group(&self, format: ColorFormat) -> &ChannelGroup {
        &self.groups[slot(format)]
    }

    /// Format whose inputs are shown.
    #[must_use]
    pub const fn manual_format(&self) -> ColorFormat {
        self.manual_format
    }

    /// Show the next format's inputs and return it.
    pub fn toggle_format(&mut self) -> ColorFormat {
        self.manual_format = self.manual_format.next();
        debug!(format = self.manual_format.label(), "toggled manual format");
        self.manual_format
    }

    /// Selected color as `#rrggbb`.
    #[must_use]
    pub fn submit(&self) -> String {
        self.selected.as_hex()
    }

    /// Type `text` into `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RejectedInput`](crate::Error::RejectedInput) if the
    /// text fails the channel's validation; nothing changes in that case.
    pub fn manual_input(&mut self, channel: ColorChannel, text: &str) -> Result<PickerUpdate> {
        let group = &mut self.groups[slot(channel.format())];
        group.update(channel, text)?;
        let color = group.color();
        self.set_color(&color)
    }

    /// Select `color` as if it had been entered manually.
    ///
    /// Every channel group is refreshed. The hue slider and well follow the
    /// color, but whatever sample they land on only reaches the swatch.
    pub fn set_color(&mut self, color: &ColorModel) -> Result<PickerUpdate> {
        for group in &mut self.groups {
            group.set_color(color);
        }
        if self.selected.equals(color) {
            return Ok(PickerUpdate::default());
        }

        debug!(color = %color, "manual color change");
        self.selected = color.clone();
        let mut update = PickerUpdate {
            selected: Some(color.clone()),
            ..PickerUpdate::default()
        };

        if let Some(hue_color) = self.slider.set_color(color)? {
            let hue = hue_color.hue();
            let echo = self.well.set_fill_hue(hue)?;
            update.hue = Some(hue);
            update.swatch = Some(self.show_in_swatch(echo));
        }
        if let Some(echo) = self.well.select_color(color)? {
            update.swatch = Some(self.show_in_swatch(echo));
        }
        Ok(update)
    }

    /// Press inside the color well.
    pub fn pointer_down_well(&mut self, point: Point) -> Result<PickerUpdate> {
        let picked = self.well.mouse_down(point)?;
        Ok(self.visual_change(picked))
    }

    /// Press on the hue slider.
    pub fn pointer_down_slider(&mut self, point: Point) -> Result<PickerUpdate> {
        let hue_color = self.slider.mouse_down(point)?;
        self.hue_change(hue_color)
    }

    /// Pointer moved anywhere; drives whichever control is being dragged.
    pub fn pointer_move(&mut self, point: Point) -> Result<PickerUpdate> {
        let picked = self.well.mouse_move(point)?;
        let mut update = self.visual_change(picked);
        let hue_color = self.slider.mouse_move(point)?;
        update.merge(self.hue_change(hue_color)?);
        Ok(update)
    }

    /// Pointer released anywhere; ends every drag.
    pub fn pointer_up(&mut self) {
        self.well.mouse_up();
        self.slider.mouse_up();
    }

    fn hue_change(&mut self, hue_color: Option<ColorModel>) -> Result<PickerUpdate> {
        let Some(hue_color) = hue_color else {
            return Ok(PickerUpdate::default());
        };
        let hue = hue_color.hue();
        let echo = self.well.set_fill_hue(hue)?;
        let mut update = self.visual_change(Some(echo));
        update.hue = Some(hue);
        Ok(update)
    }

    fn visual_change(&mut self, picked: Option<ColorModel>) -> PickerUpdate {
        let Some(color) = picked else {
            return PickerUpdate::default();
        };
        let mut update = PickerUpdate {
            swatch: Some(self.show_in_swatch(color.clone())),
            ..PickerUpdate::default()
        };
        if !self.selected.equals(&color) {
            debug!(color = %color, "visual color change");
            for group in &mut self.groups {
                group.set_color(&color);
            }
            self.selected = color.clone();
            update.selected = Some(color);
        }
        update
    }

    fn show_in_swatch(&mut self, color: ColorModel) -> ColorModel {
        self.swatch = color.clone();
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ChannelValue;
    use crate::error::Error;

    fn picker() -> ColorPicker {
        ColorPicker::new(&PickerConfig::default()).unwrap()
    }

    fn rgb_display(picker: &ColorPicker) -> Vec<String> {
        picker
            .group(ColorFormat::Rgb)
            .inputs()
            .iter()
            .map(|input| input.display_value())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let picker = picker();
        assert_eq!(picker.selected_color().hex(), "000000");
        assert_eq!(picker.swatch_color().hex(), "000000");
        assert_eq!(picker.manual_format(), ColorFormat::Rgb);
        assert_eq!(picker.submit(), "#000000");
        assert_eq!(rgb_display(&picker), ["0", "0", "0"]);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = PickerConfig::new().with_initial_color("nope");
        assert!(matches!(ColorPicker::new(&config), Err(Error::InvalidColorString(_))));
    }

    #[test]
    fn test_toggle_format_cycles() {
        let mut picker = picker();
        assert_eq!(picker.toggle_format(), ColorFormat::Hsl);
        assert_eq!(picker.toggle_format(), ColorFormat::Hex);
        assert_eq!(picker.toggle_format(), ColorFormat::Rgb);
    }

    #[test]
    fn test_manual_hex_moves_slider_and_well() {
        let mut picker = picker();
        let update = picker.manual_input(ColorChannel::Hex, "#00ff00").unwrap();

        assert_eq!(update.selected.unwrap().hex(), "00ff00");
        let hue = update.hue.unwrap();
        assert!((hue - 120.0).abs() <= 1.0);
        assert_eq!(picker.well().fill_hue(), hue);
        assert_eq!(picker.submit(), "#00ff00");
        assert_eq!(rgb_display(&picker), ["0", "255", "0"]);

        let ring = picker.well().area().ring();
        assert_eq!(ring.top(), 0.0);
        assert!(ring.left() >= 170.0);
    }

    #[test]
    fn test_manual_value_wins_over_nearest_sample() {
        let mut picker = picker();
        picker.manual_input(ColorChannel::R, "18").unwrap();
        picker.manual_input(ColorChannel::G, "52").unwrap();
        picker.manual_input(ColorChannel::B, "86").unwrap();

        assert_eq!(picker.submit(), "#123456");
        assert_eq!(
            picker.group(ColorFormat::Hex).inputs()[0].value(),
            &ChannelValue::Hex("123456".into())
        );
    }

    #[test]
    fn test_rejected_manual_input_changes_nothing() {
        let mut picker = picker();
        let err = picker.manual_input(ColorChannel::G, "256").unwrap_err();
        assert!(matches!(err, Error::RejectedInput { channel: ColorChannel::G, .. }));
        assert_eq!(picker.submit(), "#000000");
        assert_eq!(rgb_display(&picker), ["0", "0", "0"]);
    }

    #[test]
    fn test_same_color_is_quiet() {
        let mut picker = picker();
        let update = picker.set_color(&ColorModel::from_rgb(0.0, 0.0, 0.0)).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_well_drag_updates_selection_and_inputs() {
        let mut picker = picker();
        let update = picker.pointer_down_well(Point::new(400.0, -3.0)).unwrap();
        assert_eq!(update.selected.unwrap().hex(), "ff0000");
        assert_eq!(update.swatch.unwrap().hex(), "ff0000");
        assert_eq!(rgb_display(&picker), ["255", "0", "0"]);

        picker.pointer_up();
        assert!(picker.pointer_move(Point::new(0.0, 83.0)).unwrap().is_empty());
        assert_eq!(picker.submit(), "#ff0000");
    }

    #[test]
    fn test_slider_drag_refills_well() {
        let mut picker = picker();
        picker.pointer_down_well(Point::new(179.0, 0.0)).unwrap();
        picker.pointer_up();

        let strip_top = PickerConfig::default().strip_origin.y;
        let update = picker.pointer_down_slider(Point::new(120.0, strip_top + 4.0)).unwrap();
        let hue = update.hue.unwrap();
        assert!((hue - 120.0).abs() <= 2.0);
        assert_eq!(picker.well().fill_hue(), hue);

        let selected = update.selected.unwrap();
        assert_eq!(selected.hsl(), (hue, 100.0, 50.0));
        assert_eq!(picker.selected_color(), &selected);
    }

    #[test]
    fn test_pointer_move_drives_active_drag_only() {
        let mut picker = picker();
        picker.pointer_down_well(Point::new(179.0, 0.0)).unwrap();
        let update = picker.pointer_move(Point::new(179.0, 83.0)).unwrap();
        assert!(update.hue.is_none());
        assert_eq!(update.selected.unwrap().hex(), "000000");
        assert_eq!(picker.slider().area().ring().left(), 0.0);
    }
}
