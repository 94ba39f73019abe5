use platforms::{algorithms::*, Pipeline};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelKitError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// Output format for the generated platform code
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Display, EnumString, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    Js,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Js
    }
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Json => "json",
        }
    }
}

/// Detection thresholds, all defaulting to the standard pipeline values
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DetectionSettings {
    /// Pixels with all RGB channels strictly below this value are foreground
    #[serde(default = "DetectionSettings::default_threshold")]
    pub threshold: u8,
    /// Components must have strictly more pixels than this to be kept
    #[serde(default = "DetectionSettings::default_min_pixels")]
    pub min_pixels: usize,
    /// Minimum platform width in pixels
    #[serde(default = "DetectionSettings::default_min_width")]
    pub min_width: u32,
    /// Minimum platform height in pixels
    #[serde(default = "DetectionSettings::default_min_height")]
    pub min_height: u32,
}

impl DetectionSettings {
    fn default_threshold() -> u8 {
        30
    }
    fn default_min_pixels() -> usize {
        50
    }
    fn default_min_width() -> u32 {
        15
    }
    fn default_min_height() -> u32 {
        8
    }

    /// Build a detection pipeline from these settings
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::builder()
            .mask_builder(DarkPixelMaskBuilder {
                threshold: self.threshold,
            })
            .labeler(FloodFillLabeler {
                min_pixels: self.min_pixels,
            })
            .min_platform_size(self.min_width, self.min_height)
            .build()
    }
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            min_pixels: Self::default_min_pixels(),
            min_width: Self::default_min_width(),
            min_height: Self::default_min_height(),
        }
    }
}

/// Level analysis configuration loaded from a TOML or JSON file
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LevelConfig {
    /// Path to the background image to scan
    pub image_path: String,
    /// Where to write the generated platform code
    pub output_path: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub detection: DetectionSettings,
}

impl LevelConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, LevelKitError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, LevelKitError> {
        let config: LevelConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LevelKitError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json(content: &str) -> Result<Self, LevelKitError> {
        let config: LevelConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LevelKitError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(LevelKitError::UnsupportedFileFormat),
        }
    }

    /// Save configuration to a TOML file
    pub fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LevelKitError> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Convert configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, LevelKitError> {
        Ok(toml::to_string_pretty(&self)?)
    }

    /// Convert configuration to a JSON string
    pub fn to_json(&self) -> Result<String, LevelKitError> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    /// JSON schema for configuration files
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(LevelConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_preserves_config() {
        let config = LevelConfig {
            image_path: "images/background.png".to_string(),
            output_path: "detected_platforms.js".to_string(),
            format: OutputFormat::Js,
            detection: DetectionSettings::default(),
        };

        let toml = config.to_toml().unwrap();
        let parsed = LevelConfig::from_toml(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn missing_detection_section_falls_back_to_defaults() {
        let config = LevelConfig::from_toml(
            "image_path = \"bg.png\"\noutput_path = \"out.js\"\n",
        )
        .unwrap();
        assert_eq!(config.detection, DetectionSettings::default());
        assert_eq!(config.format, OutputFormat::Js);
    }

    #[test]
    fn partial_detection_settings_merge_with_defaults() {
        let config = LevelConfig::from_json(
            r#"{"image_path": "bg.png", "output_path": "out.json", "format": "json",
                "detection": {"threshold": 60}}"#,
        )
        .unwrap();
        assert_eq!(config.detection.threshold, 60);
        assert_eq!(config.detection.min_pixels, 50);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = LevelConfig::from_file("config.yaml").unwrap_err();
        assert!(matches!(err, LevelKitError::UnsupportedFileFormat));
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JS".parse::<OutputFormat>().unwrap(), OutputFormat::Js);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }
}
