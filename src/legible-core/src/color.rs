//! RGB color representation.
//!
//! This module provides the [`Color`] value handed to the luminance
//! classifier by the UI layer, along with the constructors and parsers
//! needed to obtain one from the usual places a UI gets colors from.
//!
//! # Color Representation
//!
//! Colors are represented using normalized f32 channels in the range 0.0 to
//! 1.0. There is no alpha channel. The plain constructors accept any value
//! and do not clamp: out-of-range channels simply flow through the
//! brightness arithmetic. Use [`Color::try_rgb`] when non-finite input must
//! be rejected.
//!
//! # Supported Formats
//!
//! - Hex strings: `#RGB`, `#RRGGBB` (the `#` is optional)
//! - RGB u8 values: `(0-255, 0-255, 0-255)`
//! - Named CSS/ANSI colors
//!
//! # Examples
//!
//! ```
//! use legible_core::color::Color;
//!
//! let red = Color::from_hex("#FF0000").unwrap();
//! let green = Color::from_rgb_u8(0, 255, 0);
//! let navy: Color = "navy".parse().unwrap();
//! let mid = Color::gray(0.5);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ColorParseError, Error, Result};

/// An RGB color with normalized f32 channels in the range 0.0 to 1.0.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel (0.0 - 1.0).
    pub r: f32,
    /// Green channel (0.0 - 1.0).
    pub g: f32,
    /// Blue channel (0.0 - 1.0).
    pub b: f32,
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::rgb({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Common color constants
// ============================================================================

impl Color {
    /// Black (#000000).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// White (#FFFFFF).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Red (#FF0000).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Green (#00FF00).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Blue (#0000FF).
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Yellow (#FFFF00).
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    /// Cyan (#00FFFF).
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);

    /// Magenta (#FF00FF).
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    /// Gray (#808080).
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    /// Dark gray (#404040).
    pub const DARK_GRAY: Self = Self::rgb(0.25, 0.25, 0.25);

    /// Light gray (#BFBFBF).
    pub const LIGHT_GRAY: Self = Self::rgb(0.75, 0.75, 0.75);

    /// Orange (#FFA500).
    pub const ORANGE: Self = Self::rgb(1.0, 0.647, 0.0);

    /// Purple (#800080).
    pub const PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);

    /// Navy (#000080).
    pub const NAVY: Self = Self::rgb(0.0, 0.0, 0.5);

    /// Teal (#008080).
    pub const TEAL: Self = Self::rgb(0.0, 0.5, 0.5);

    /// Olive (#808000).
    pub const OLIVE: Self = Self::rgb(0.5, 0.5, 0.0);

    /// Maroon (#800000).
    pub const MAROON: Self = Self::rgb(0.5, 0.0, 0.0);
}

// ============================================================================
// Constructors
// ============================================================================

impl Color {
    /// Creates a color from normalized RGB channels.
    ///
    /// No validation is performed.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from normalized RGB channels, rejecting NaN and
    /// infinite values.
    ///
    /// Finite values outside 0.0 to 1.0 are accepted unchanged.
    ///
    /// ```
    /// use legible_core::color::Color;
    ///
    /// assert!(Color::try_rgb(0.2, 0.4, 0.6).is_ok());
    /// assert!(Color::try_rgb(f32::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn try_rgb(r: f32, g: f32, b: f32) -> Result<Self> {
        for (channel, value) in [("r", r), ("g", g), ("b", b)] {
            if !value.is_finite() {
                return Err(Error::InvalidArgument { channel, value });
            }
        }
        Ok(Self::rgb(r, g, b))
    }

    /// Creates a color from u8 RGB channels (0-255).
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Creates a gray color with all three channels set to `value`.
    #[inline]
    pub const fn gray(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Returns the channels as u8 values (0-255), clamped.
    #[inline]
    pub fn to_rgb_u8(&self) -> (u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Returns true if this color is approximately equal to another.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

// ============================================================================
// Hex parsing and formatting
// ============================================================================

impl Color {
    /// Parses a color from a hex string.
    ///
    /// Supports `#RGB` (expanded to `#RRGGBB`) and `#RRGGBB`. The `#` prefix
    /// is optional. Forms carrying an alpha channel are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use legible_core::color::Color;
    ///
    /// let red = Color::from_hex("#FF0000").unwrap();
    /// let green = Color::from_hex("00FF00").unwrap();
    /// let short_white = Color::from_hex("#FFF").unwrap();
    /// assert!(Color::from_hex("#FF000080").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> std::result::Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        let digits = hex.as_bytes();
        if digits.len() != 3 && digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }

        let nibbles = digits
            .iter()
            .map(|&d| char::from(d).to_digit(16).ok_or(ColorParseError::InvalidHexChar))
            .collect::<std::result::Result<Vec<u32>, _>>()?;

        // #RGB -> #RRGGBB
        let byte = |i: usize| -> u8 {
            let value = if nibbles.len() == 3 {
                nibbles[i] * 17
            } else {
                nibbles[2 * i] * 16 + nibbles[2 * i + 1]
            };
            value as u8
        };

        Ok(Self::from_rgb_u8(byte(0), byte(1), byte(2)))
    }

    /// Converts the color to an uppercase `#RRGGBB` string.
    ///
    /// Channels are clamped to 0.0 to 1.0 before formatting.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb_u8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

// ============================================================================
// Named color parsing
// ============================================================================

impl Color {
    /// Parses a color from a named color string or hex value.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use legible_core::color::Color;
    ///
    /// let red = Color::parse("red").unwrap();
    /// let hex_blue = Color::parse(" #0000FF ").unwrap();
    /// ```
    pub fn parse(input: &str) -> std::result::Result<Self, ColorParseError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }

        if let Some(color) = Self::from_name(input) {
            return Ok(color);
        }

        if input.starts_with('#') || input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::from_hex(input);
        }

        Err(ColorParseError::UnknownColor(input.to_string()))
    }

    /// Returns a color for the given CSS/ANSI color name, or `None` if not found.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        match lower.as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::RED),
            "green" | "lime" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            "yellow" => Some(Self::YELLOW),
            "cyan" | "aqua" => Some(Self::CYAN),
            "magenta" | "fuchsia" => Some(Self::MAGENTA),
            "gray" | "grey" => Some(Self::GRAY),
            "darkgray" | "darkgrey" => Some(Self::DARK_GRAY),
            "lightgray" | "lightgrey" | "silver" => Some(Self::LIGHT_GRAY),
            "orange" => Some(Self::ORANGE),
            "purple" => Some(Self::PURPLE),
            "navy" => Some(Self::NAVY),
            "teal" => Some(Self::TEAL),
            "olive" => Some(Self::OLIVE),
            "maroon" => Some(Self::MAROON),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

// ============================================================================
// Type conversions
// ============================================================================

impl From<(f32, f32, f32)> for Color {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}
