//! TOML configuration for [`Classifier`](crate::luminance::Classifier).
//!
//! Every key is optional; missing keys fall back to the fixed black/white
//! rule with a 0.5 threshold.
//!
//! ```toml
//! threshold = 0.5
//! dark_text = "#000000"
//! light_text = "#FFFFFF"
//! ```
//!
//! # Example
//!
//! ```rust
//! use legible_core::config::ClassifierConfig;
//!
//! let config = ClassifierConfig::from_toml_str("threshold = 0.6").unwrap();
//! assert_eq!(config.threshold, 0.6);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::Color;
use crate::error::{ConfigError, ConfigResult};
use crate::luminance::LIGHT_THRESHOLD;

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Brightness above which a background counts as light.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Text color used on light backgrounds.
    #[serde(default = "default_dark_text")]
    pub dark_text: Color,

    /// Text color used on dark backgrounds.
    #[serde(default = "default_light_text")]
    pub light_text: Color,
}

fn default_threshold() -> f64 {
    LIGHT_THRESHOLD
}

fn default_dark_text() -> Color {
    Color::BLACK
}

fn default_light_text() -> Color {
    Color::WHITE
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            dark_text: default_dark_text(),
            light_text: default_light_text(),
        }
    }
}

impl ClassifierConfig {
    /// Parse a configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    /// Load a configuration file and validate it.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content, path)?;
        debug!(
            path = %path.display(),
            threshold = config.threshold,
            "loaded classifier config"
        );
        Ok(config)
    }

    /// Check that the threshold is a finite value in 0.0 to 1.0.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidValue {
                key: "threshold".to_string(),
                message: format!("expected a number in 0.0..=1.0, got {}", self.threshold),
            });
        }
        Ok(())
    }

    fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::from(path),
            source: e,
        })?;

        if let Err(e) = config.validate() {
            warn!(path = %path.display(), error = %e, "rejected classifier config");
            return Err(e);
        }

        Ok(config)
    }
}
