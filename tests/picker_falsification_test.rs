//! Falsification tests for the color model, palette search and picker.
//!
//! Each test states a claim that a wrong implementation would refute.
//!
//! Run: cargo test --test picker_falsification_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use trueno_picker::color::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, round_triple};
use trueno_picker::geometry::{clamp_to_field, index_to_point, point_to_index};
use trueno_picker::gradient::HUE_STRIP_STOPS;
use trueno_picker::prelude::*;

fn hue_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

fn painted_field(surface: &GradientSurface, width: u32, height: u32) -> PaletteField {
    let mut fb = Framebuffer::new(width, height).unwrap();
    surface.paint(&mut fb);
    PaletteField::from_raster(&fb.as_raster())
}

// ============================================================================
// CONVERSIONS (1-6)
// ============================================================================

/// Claim 1: the literal conversions hold exactly
#[test]
fn claim_01_literal_conversions() {
    assert_eq!(hex_to_rgb("ff0000"), (255.0, 0.0, 0.0));
    assert_eq!(rgb_to_hex(0.0, 255.0, 0.0), "00ff00");
    assert_eq!(rgb_to_hsl(255.0, 255.0, 255.0), (0.0, 0.0, 100.0));
    assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255.0, 0.0, 0.0));
}

/// Claim 2: every gray has zero saturation and zero hue
#[test]
fn claim_02_grays_are_achromatic() {
    for g in 0..=255 {
        let (h, s, _) = rgb_to_hsl(f64::from(g), f64::from(g), f64::from(g));
        assert_eq!((h, s), (0.0, 0.0), "Claim 2 FALSIFIED at gray {g}");
    }
}

/// Claim 3: hex is the identity of a color across all three construction paths
#[test]
fn claim_03_equality_is_by_hex() {
    let a = ColorModel::from_hex("#1E90FF");
    let b: ColorModel = "rgb(30, 144, 255)".parse().unwrap();
    let c = ColorModel::from_rgb(30.0, 144.0, 255.0);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.as_rgb(), "rgb(30,144,255)");
}

/// Claim 4: derived values are rounded, native values are not
#[test]
fn claim_04_only_derived_values_round() {
    let native = ColorModel::from_rgb(12.4, 200.6, 99.5);
    assert_eq!(native.rgb(), (12.4, 200.6, 99.5));
    let (h, s, l) = native.hsl();
    assert_eq!((h, s, l), (h.round(), s.round(), l.round()));
}

/// Claim 5: unknown prefixes fail at construction instead of later
#[test]
fn claim_05_unknown_prefix_fails_fast() {
    for bad in ["red", "cmyk(0,0,0,0)", "", "  "] {
        assert!(
            matches!(ColorModel::parse(bad), Err(Error::InvalidColorString(_))),
            "Claim 5 FALSIFIED for {bad:?}"
        );
    }
}

/// Claim 6: a color repeatedly read returns identical values
#[test]
fn claim_06_cached_reads_are_stable() {
    let color = ColorModel::from_hsl(330.0, 47.0, 63.0);
    let first = (color.hex().to_string(), color.rgb());
    for _ in 0..10 {
        assert_eq!((color.hex().to_string(), color.rgb()), first);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Claim 7: hex round-trips every 8-bit RGB triple
    #[test]
    fn claim_07_hex_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
        prop_assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)), (r, g, b));
    }

    /// Claim 8: HSL survives a trip through RGB within one unit
    #[test]
    fn claim_08_hsl_round_trip(h in 0u16..360, s in 1u16..=100, l in 1u16..100) {
        let (h, s, l) = (f64::from(h), f64::from(s), f64::from(l));
        let (r, g, b) = hsl_to_rgb(h, s, l);
        let (h2, s2, l2) = round_triple(rgb_to_hsl(r, g, b));
        prop_assert!(hue_gap(h, h2) <= 1.0, "h {} -> {}", h, h2);
        prop_assert!((s - s2).abs() <= 1.0, "s {} -> {}", s, s2);
        prop_assert!((l - l2).abs() <= 1.0, "l {} -> {}", l, l2);
    }

    /// Claim 9: conversion outputs stay in range
    #[test]
    fn claim_09_ranges(r in 0.0f64..=255.0, g in 0.0f64..=255.0, b in 0.0f64..=255.0) {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        prop_assert!((0.0..360.0).contains(&h));
        prop_assert!((0.0..=100.0).contains(&s));
        prop_assert!((0.0..=100.0).contains(&l));
        let (r2, g2, b2) = hsl_to_rgb(h, s, l);
        for c in [r2, g2, b2] {
            prop_assert!((0.0..=255.0).contains(&c));
        }
    }

    /// Claim 10: clamping is idempotent and leaves inside points alone
    #[test]
    fn claim_10_clamp_idempotent(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 1u32..300,
        h in 1u32..300,
    ) {
        let bounds = Rect::new(20.0, 30.0, f64::from(w), f64::from(h));
        let once = clamp_to_field(Point::new(x, y), bounds);
        prop_assert_eq!(clamp_to_field(once, bounds), once);
        prop_assert!(bounds.contains(once));
        if bounds.contains(Point::new(x, y)) {
            prop_assert_eq!(once, Point::new(x, y));
        }
    }
}

// ============================================================================
// PALETTE AND SEARCH (11-17)
// ============================================================================

/// Claim 11: the known 2x2 grid resolves to (1, 0)
#[test]
fn claim_11_known_grid() {
    let field = PaletteField::from_samples(
        2,
        2,
        vec![(0.0, 0.0, 0.0), (120.0, 50.0, 50.0), (240.0, 100.0, 100.0), (0.0, 0.0, 50.0)],
    )
    .unwrap();
    let target = ColorModel::from_hsl(121.0, 51.0, 49.0);
    assert_eq!(nearest_to_color(&field, &target).unwrap(), (1, 0));
}

/// Claim 12: equidistant samples resolve to the lower row-major index
#[test]
fn claim_12_ties_prefer_first() {
    let field = PaletteField::from_samples(
        3,
        1,
        vec![(10.0, 50.0, 50.0), (30.0, 50.0, 50.0), (10.0, 50.0, 50.0)],
    )
    .unwrap();
    assert_eq!(nearest_to_color(&field, &ColorModel::from_hsl(20.0, 50.0, 50.0)).unwrap(), (0, 0));
    assert_eq!(nearest_hue(&field, 10.0).unwrap(), 0);
}

/// Claim 13: a hue patch leaves achromatic samples at hue zero
#[test]
fn claim_13_patch_keeps_grays() {
    let bytes: Vec<u8> = [[255, 255, 255, 255], [128, 128, 128, 255], [0, 0, 0, 255], [0, 0, 255, 255]]
        .concat();
    let mut field = PaletteField::resample(&bytes, 4, 1).unwrap();
    field.patch_hue(75.0);
    let hues: Vec<f64> = field.samples().iter().map(|s| s.0).collect();
    assert_eq!(hues, [0.0, 0.0, 0.0, 75.0]);
}

/// Claim 14: the painted hue strip places green near column 120 of 180
#[test]
fn claim_14_hue_strip_layout() {
    let field = painted_field(&GradientSurface::hue_strip(&HUE_STRIP_STOPS).unwrap(), 180, 12);
    let column = nearest_hue(&field, 120.0).unwrap();
    assert!(
        (i64::from(column) - 120).abs() <= 2,
        "Claim 14 FALSIFIED: green at column {column}"
    );
    let sampled = field.sample_at(column, 0).unwrap();
    assert_abs_diff_eq!(sampled.0, 120.0, epsilon = 1.0);
}

/// Claim 15: a pure hue lives in the top-right corner of its well
#[test]
fn claim_15_pure_hue_top_right() {
    let field = painted_field(&GradientSurface::color_well(200.0), 180, 84);
    let (x, y) = nearest_to_color(&field, &ColorModel::from_hsl(200.0, 100.0, 50.0)).unwrap();
    assert_eq!(y, 0);
    assert!(x >= 170, "Claim 15 FALSIFIED: x = {x}");
    assert_eq!(field.sample_at(x, y).unwrap(), (200.0, 100.0, 50.0));
}

/// Claim 16: the color under a point equals the sample the search points to
#[test]
fn claim_16_point_and_search_agree() {
    let bounds = Rect::new(40.0, 10.0, 180.0, 84.0);
    let field = painted_field(&GradientSurface::color_well(30.0), 180, 84);
    for target in ["#ffffff", "#000000", "#ff8000", "#804020"] {
        let target = ColorModel::parse(target).unwrap();
        let point = nearest_point_to_color(&field, &target, bounds).unwrap();
        let (col, row) = point_to_index(point, bounds);
        assert_eq!(index_to_point((col, row), bounds), point);
        let under = field.color_at(point, bounds).unwrap();
        let (h, s, l) = field.sample_at(col, row).unwrap();
        assert_eq!(under, ColorModel::from_hsl(h, s, l));
    }
}

/// Claim 17: empty fields signal instead of answering
#[test]
fn claim_17_empty_field_signals() {
    let field = PaletteField::resample(&[], 0, 0).unwrap();
    assert_eq!(nearest_hue(&field, 0.0), Err(Error::EmptyField));
    assert_eq!(nearest_to_color(&field, &ColorModel::default()), Err(Error::EmptyField));
    assert_eq!(field.sample_at(0, 0), Err(Error::EmptyField));
}

// ============================================================================
// PICKER (18-22)
// ============================================================================

/// Claim 18: a typed color is what gets submitted, whatever the well shows
#[test]
fn claim_18_manual_entry_wins() {
    let mut picker = ColorPicker::new(&PickerConfig::default()).unwrap();
    picker.toggle_format();
    picker.manual_input(ColorChannel::H, "200").unwrap();
    picker.manual_input(ColorChannel::S, "37%").unwrap();
    picker.manual_input(ColorChannel::L, "41%").unwrap();

    let expected = ColorModel::from_hsl(200.0, 37.0, 41.0);
    assert_eq!(picker.selected_color(), &expected);
    assert_eq!(picker.submit(), expected.as_hex());
}

/// Claim 19: rejected text never changes the selection
#[test]
fn claim_19_rejections_are_inert() {
    let mut picker = ColorPicker::new(&PickerConfig::default().with_initial_color("#336699")).unwrap();
    for (channel, text) in [
        (ColorChannel::R, "256"),
        (ColorChannel::R, "-1"),
        (ColorChannel::H, "360"),
        (ColorChannel::S, "50"),
        (ColorChannel::L, "101%"),
        (ColorChannel::Hex, "336699"),
        (ColorChannel::Hex, "#xyz"),
        (ColorChannel::G, ""),
    ] {
        let result = picker.manual_input(channel, text);
        assert!(
            matches!(result, Err(Error::RejectedInput { .. })),
            "Claim 19 FALSIFIED: {channel:?} accepted {text:?}"
        );
        assert_eq!(picker.submit(), "#336699");
    }
}

/// Claim 20: dragging in the well updates selection, swatch and inputs together
#[test]
fn claim_20_well_drag_syncs_everything() {
    let mut picker = ColorPicker::new(&PickerConfig::default()).unwrap();
    let update = picker.pointer_down_well(Point::new(179.0, 0.0)).unwrap();
    let picked = update.selected.unwrap();
    assert_eq!(picked.hex(), "ff0000");
    assert_eq!(picker.swatch_color(), &picked);
    let hex = picker.group(ColorFormat::Hex).inputs()[0].display_value();
    assert_eq!(hex, "#ff0000");
}

/// Claim 21: a hue drag recolors the well without moving its ring
#[test]
fn claim_21_hue_drag_keeps_well_ring() {
    let config = PickerConfig::default();
    let mut picker = ColorPicker::new(&config).unwrap();
    picker.pointer_down_well(Point::new(179.0, 0.0)).unwrap();
    picker.pointer_up();
    let ring_before = picker.well().area().ring().position();

    let update = picker
        .pointer_down_slider(Point::new(60.0, config.strip_origin.y))
        .unwrap();
    let hue = update.hue.unwrap();
    assert!(hue_gap(hue, 240.0) <= 5.0, "Claim 21 FALSIFIED: hue {hue}");
    assert_eq!(picker.well().area().ring().position(), ring_before);
    assert_eq!(picker.selected_color().hue(), hue);
}

/// Claim 22: the format toggler visits all three formats and returns
#[test]
fn claim_22_format_cycle() {
    let mut picker = ColorPicker::new(&PickerConfig::default()).unwrap();
    let start = picker.manual_format();
    let seen: Vec<ColorFormat> = (0..3).map(|_| picker.toggle_format()).collect();
    assert_eq!(seen.last(), Some(&start));
    for format in ColorFormat::ALL {
        assert!(seen.contains(&format));
    }
}
