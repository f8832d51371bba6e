//! # Trueno-Picker
//!
//! Color model, palette sampling and nearest-match search behind a visual
//! color picker, with the picker's controllers expressed as plain state
//! machines.
//!
//! ## Overview
//!
//! - **Color model**: one color, three textual forms (hex, RGB, HSL), each
//!   derived lazily and cached
//! - **Palette field**: per-pixel HSL samples of a painted gradient surface
//! - **Search**: nearest sample to a color or hue, and the color under a
//!   screen point
//! - **Picker**: color well, hue slider and manual channel entry wired
//!   together without any UI toolkit
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_picker::prelude::*;
//!
//! let mut picker = ColorPicker::new(&PickerConfig::default())?;
//! picker.pointer_down_well(Point::new(179.0, 0.0))?;
//! picker.pointer_up();
//! assert_eq!(picker.submit(), "#ff0000");
//! # Ok::<(), trueno_picker::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`config::PickerConfig`] and the
//!   geometry and format types it contains

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color model, conversions and manual channel entry.
pub mod color;

/// Picker configuration.
pub mod config;

/// RGBA rasters.
pub mod framebuffer;

/// Points, rectangles and field clamping.
pub mod geometry;

/// Linear gradients and the surfaces built from them.
pub mod gradient;

// ============================================================================
// Sampling and Search
// ============================================================================

/// HSL fields sampled from rasters.
pub mod palette;

/// Nearest-match search over palette fields.
pub mod search;

// ============================================================================
// Controllers
// ============================================================================

/// Color well, hue slider and the picker that coordinates them.
pub mod picker;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-picker operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use trueno_picker::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{
        ChannelGroup, ChannelInput, ChannelValue, ColorChannel, ColorFormat, ColorModel, Rgba,
    };
    pub use crate::config::PickerConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{Framebuffer, Raster};
    pub use crate::geometry::{Point, Rect};
    pub use crate::gradient::{GradientSurface, LinearGradient};
    pub use crate::palette::PaletteField;
    pub use crate::picker::{ColorPicker, ColorWell, HueSlider, PickerUpdate};
    pub use crate::search::{nearest_hue, nearest_point_to_color, nearest_to_color};
}

// ============================================================================
// Tests
// ============================================================================
