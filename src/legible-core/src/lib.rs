//! Luminance-based text color selection for UI layers.
//!
//! This crate answers one question for a UI: given a background color,
//! should text drawn on it be black or white?
//!
//! - [`luminance`]: brightness computation and the light/dark decision
//! - [`color`]: the normalized RGB [`Color`] value and its parsers
//! - [`config`]: optional TOML configuration for a [`Classifier`]
//! - [`error`]: error types for the fallible constructors and loaders
//!
//! # Examples
//!
//! ```
//! use legible_core::{Color, compute_brightness, contrast_color, is_light_color, text_color};
//!
//! let background = Color::from_hex("#3366CC").unwrap();
//! let brightness = compute_brightness(background);
//!
//! assert!(brightness < 0.5);
//! assert!(!is_light_color(background));
//! assert_eq!(text_color(background), "#FFFFFF");
//! assert_eq!(contrast_color(background), text_color(background));
//! ```
//!
//! All functions are pure and may be called from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]

pub mod color;
pub mod config;
pub mod error;
pub mod luminance;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use config::ClassifierConfig;
pub use error::{ColorParseError, ConfigError, Error, Result};
pub use luminance::{
    compute_brightness, contrast_color, is_light_color, text_color, Classifier, TextColor,
};
