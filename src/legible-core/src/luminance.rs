//! Luminance classification for picking legible text colors.
//!
//! A background is classified as light or dark by its YIQ-style brightness:
//!
//! ```text
//! brightness = 0.299 * r + 0.587 * g + 0.114 * b
//! ```
//!
//! A background is *light* when its brightness is strictly greater than
//! [`LIGHT_THRESHOLD`]. Light backgrounds get black text, everything else
//! (including a brightness of exactly 0.5) gets white text.
//!
//! Channels are widened to `f64` and summed left to right, so results match
//! plain double-precision evaluation of the formula. Nothing is clamped or
//! validated: out-of-range channels propagate arithmetically.
//!
//! # Examples
//!
//! ```
//! use legible_core::color::Color;
//! use legible_core::luminance::{contrast_color, is_light_color, text_color};
//!
//! assert_eq!(text_color(Color::WHITE), "#000000");
//! assert_eq!(text_color(Color::BLACK), "#FFFFFF");
//! assert!(is_light_color(Color::GREEN));
//! assert_eq!(contrast_color(Color::RED), "#FFFFFF");
//! ```

use std::fmt;

use tracing::trace;

use crate::color::Color;
use crate::config::ClassifierConfig;

/// Weight of the red channel.
pub const RED_WEIGHT: f64 = 0.299;

/// Weight of the green channel.
pub const GREEN_WEIGHT: f64 = 0.587;

/// Weight of the blue channel.
pub const BLUE_WEIGHT: f64 = 0.114;

/// Brightness above which a color counts as light. The comparison is strict.
pub const LIGHT_THRESHOLD: f64 = 0.5;

/// Hex literal for black text.
pub const BLACK_HEX: &str = "#000000";

/// Hex literal for white text.
pub const WHITE_HEX: &str = "#FFFFFF";

/// Computes the perceptual brightness of a color.
///
/// Typically in 0.0 to 1.0; unbounded when the channels are out of range.
#[inline]
pub fn compute_brightness(color: Color) -> f64 {
    RED_WEIGHT * f64::from(color.r)
        + GREEN_WEIGHT * f64::from(color.g)
        + BLUE_WEIGHT * f64::from(color.b)
}

/// Returns true if the color's brightness is strictly greater than 0.5.
#[inline]
pub fn is_light_color(color: Color) -> bool {
    compute_brightness(color) > LIGHT_THRESHOLD
}

/// Returns the text color to draw on `background`: `"#000000"` on light
/// backgrounds, `"#FFFFFF"` otherwise.
pub fn text_color(background: Color) -> &'static str {
    let brightness = compute_brightness(background);
    let hex = if brightness > LIGHT_THRESHOLD {
        BLACK_HEX
    } else {
        WHITE_HEX
    };
    trace!(brightness, text = hex, "selected text color");
    hex
}

/// Returns the contrast color for `color`.
///
/// Same decision as [`text_color`], kept under its own name for call sites
/// that pick a foreground against an arbitrary color rather than a
/// background.
pub fn contrast_color(color: Color) -> &'static str {
    TextColor::for_background(color).as_hex()
}

// ============================================================================
// TextColor
// ============================================================================

/// The two text colors the classifier can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    /// `#000000`, used on light backgrounds.
    Black,
    /// `#FFFFFF`, used on dark backgrounds.
    White,
}

impl TextColor {
    /// Picks the text color for a background.
    #[inline]
    pub fn for_background(background: Color) -> Self {
        if is_light_color(background) {
            Self::Black
        } else {
            Self::White
        }
    }

    /// Returns the hex literal for this text color.
    #[inline]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Black => BLACK_HEX,
            Self::White => WHITE_HEX,
        }
    }

    /// Returns the text color as a [`Color`].
    #[inline]
    pub const fn to_color(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::White => Color::WHITE,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

impl From<TextColor> for Color {
    fn from(text: TextColor) -> Self {
        text.to_color()
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// A classifier driven by a [`ClassifierConfig`].
///
/// `Classifier::default()` makes the same decisions as the free functions
/// in this module. The free functions never consult a configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Creates a classifier from a configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Computes the brightness of `color`.
    #[inline]
    pub fn brightness(&self, color: Color) -> f64 {
        compute_brightness(color)
    }

    /// Returns true if `color` is brighter than the configured threshold.
    #[inline]
    pub fn is_light(&self, color: Color) -> bool {
        self.brightness(color) > self.config.threshold
    }

    /// Returns the configured text color for `background`.
    pub fn text_color(&self, background: Color) -> Color {
        let brightness = self.brightness(background);
        let light = brightness > self.config.threshold;
        trace!(
            brightness,
            threshold = self.config.threshold,
            light,
            "classified background"
        );
        if light {
            self.config.dark_text
        } else {
            self.config.light_text
        }
    }

    /// Returns the configured text color for `background` as `#RRGGBB`.
    pub fn text_hex(&self, background: Color) -> String {
        self.text_color(background).to_hex()
    }
}
