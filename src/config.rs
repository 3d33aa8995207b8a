//! Project configuration (pxl.yaml).
//!
//! Optional per-project defaults for the pixelate command. Every
//! field is fail-soft: a missing or malformed value falls back to the
//! builtin default for that field alone, so a typo in one line never
//! invalidates the rest of the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{PxlError, Result};
use crate::types::{ColorMode, PixelateOptions, PIXEL_SIZE_DEFAULT};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "pxl.yaml";

/// Configuration loaded from pxl.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default pixel block edge.
    #[serde(deserialize_with = "lenient_u32")]
    pub pixel_size: Option<u32>,

    /// Default colour mode name ("full", "16", "8", "grayscale", "1bit").
    #[serde(deserialize_with = "lenient_string")]
    pub colors: Option<String>,

    /// Default grid-overlay toggle.
    #[serde(deserialize_with = "lenient_bool")]
    pub show_grid: Option<bool>,

    /// Default output directory.
    #[serde(deserialize_with = "lenient_string")]
    pub output: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PxlError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PxlError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })
    }

    /// Load `pxl.yaml` from the working directory when present,
    /// otherwise fall back to builtin defaults.
    pub fn discover() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve engine options from this config.
    pub fn options(&self) -> PixelateOptions {
        PixelateOptions {
            pixel_size: self.pixel_size.unwrap_or(PIXEL_SIZE_DEFAULT),
            color_mode: self
                .colors
                .as_deref()
                .map(ColorMode::parse_lenient)
                .unwrap_or_default(),
            show_grid: self.show_grid.unwrap_or(false),
        }
    }

    /// Resolve the output directory, defaulting to `dist`.
    pub fn effective_output(&self) -> PathBuf {
        self.output
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dist"))
    }
}

// The lenient_* helpers decode through a Value so a wrong-typed field
// becomes None instead of failing the whole document.

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<u32>, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<bool>, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.options(), PixelateOptions::default());
        assert_eq!(config.effective_output(), PathBuf::from("dist"));
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
pixel_size: 12
colors: "16"
show_grid: true
output: build/pixelated
"#;
        let config = Config::parse(yaml).unwrap();
        let options = config.options();

        assert_eq!(options.pixel_size, 12);
        assert_eq!(options.color_mode, ColorMode::Sixteen);
        assert!(options.show_grid);
        assert_eq!(config.effective_output(), PathBuf::from("build/pixelated"));
    }

    #[test]
    fn test_invalid_fields_default_independently() {
        // pixel_size is malformed; the other fields must survive.
        let yaml = r#"
pixel_size: lots
colors: grayscale
show_grid: "maybe"
"#;
        let config = Config::parse(yaml).unwrap();
        let options = config.options();

        assert_eq!(options.pixel_size, PIXEL_SIZE_DEFAULT);
        assert_eq!(options.color_mode, ColorMode::Grayscale);
        assert!(!options.show_grid);
    }

    #[test]
    fn test_unknown_colour_mode_defaults_to_full() {
        let config = Config::parse("colors: vaporwave").unwrap();
        assert_eq!(config.options().color_mode, ColorMode::Full);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("show_grid: true").unwrap();
        let options = config.options();

        assert_eq!(options.pixel_size, PIXEL_SIZE_DEFAULT);
        assert_eq!(options.color_mode, ColorMode::Full);
        assert!(options.show_grid);
    }
}
