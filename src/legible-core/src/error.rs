//! Error types for color construction, parsing and classifier configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for `legible` operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A color channel was not a finite number.
    #[error("invalid argument: channel `{channel}` is not a finite number ({value})")]
    InvalidArgument {
        /// Channel name (`r`, `g` or `b`).
        channel: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A color string could not be parsed.
    #[error("color parse error: {0}")]
    Parse(#[from] ColorParseError),

    /// Classifier configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3 or 6)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}

/// Errors that can occur while loading a classifier configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML in '{path}': {source}")]
    ParseError {
        /// File (or `<inline>`) holding the TOML.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Offending key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_channel() {
        let err = Error::InvalidArgument {
            channel: "g",
            value: f32::NAN,
        };
        let msg = err.to_string();
        assert!(msg.contains("`g`"), "{msg}");
        assert!(msg.contains("NaN"), "{msg}");
    }

    #[test]
    fn parse_error_converts_into_core_error() {
        let err: Error = ColorParseError::InvalidLength(5).into();
        assert!(matches!(err, Error::Parse(ColorParseError::InvalidLength(5))));
        assert_eq!(
            err.to_string(),
            "color parse error: invalid hex length: 5 (expected 3 or 6)"
        );
    }

    #[test]
    fn config_error_is_transparent() {
        let err: Error = ConfigError::InvalidValue {
            key: "threshold".to_string(),
            message: "must be finite".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'threshold': must be finite"
        );
    }
}
