//! Configuration loading for the scene core.
//!
//! All tuning knobs are loaded from a TOML file; every section and every
//! field falls back to the defaults baked into the component it belongs to.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::effects::EffectsConfig;
use crate::journey::JourneyConfig;
use crate::layout::LayoutConfig;
use crate::marquee::MarqueeConfig;

/// Complete scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// World layout settings
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Post-processing effect settings
    #[serde(default)]
    pub effects: EffectsConfig,
    /// Journey prompt settings
    #[serde(default)]
    pub journey: JourneyConfig,
    /// Title marquee settings
    #[serde(default)]
    pub marquee: MarqueeConfig,
}

impl SceneConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Showroom scene configuration

[layout]
base_x = 0.0
base_y = 0.0
inter_distance = 24.0
jitter_range = 5.0

[effects]
ambient_blur = 1.0
focus_duration = 2.0

[journey]
min_distance = 75.0
message_count = 4

[marquee]
width = 20
glyph = "🚗"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SceneConfig::default();

        assert_eq!(config.layout.inter_distance, 24.0);
        assert_eq!(config.layout.jitter_range, 5.0);
        assert_eq!(config.effects.ambient_blur, 1.0);
        assert_eq!(config.effects.focus_duration, 2.0);
        assert_eq!(config.journey.min_distance, 75.0);
        assert_eq!(config.marquee.width, 20);
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml = r#"
            [layout]
            inter_distance = 30.0

            [effects]
            focus_duration = 1.5
        "#;

        let config = SceneConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.layout.inter_distance, 30.0);
        assert_eq!(config.effects.focus_duration, 1.5);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [journey]
            min_distance = 10.0
        "#;

        let config = SceneConfig::from_toml_str(toml).unwrap();

        // Specified value
        assert_eq!(config.journey.min_distance, 10.0);
        // Default values
        assert_eq!(config.journey.message_count, 4);
        assert_eq!(config.layout.inter_distance, 24.0);
        assert_eq!(config.marquee.glyph, "🚗");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(SceneConfig::from_toml_str("[layout").is_err());
    }

    #[test]
    fn test_config_to_toml_roundtrip() {
        let config = SceneConfig::default();
        let toml = config.to_toml().unwrap();
        let parsed = SceneConfig::from_toml_str(&toml).unwrap();

        assert_eq!(parsed.layout.inter_distance, config.layout.inter_distance);
        assert_eq!(parsed.marquee.width, config.marquee.width);
    }

    #[test]
    fn test_default_config_toml_parses() {
        let config = SceneConfig::from_toml_str(&default_config_toml()).unwrap();

        assert_eq!(config.layout.inter_distance, 24.0);
        assert_eq!(config.effects.focus_duration, 2.0);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        std::fs::write(&path, "[effects]\nambient_blur = 0.5\n").unwrap();

        let config = SceneConfig::from_file(&path).unwrap();
        assert_eq!(config.effects.ambient_blur, 0.5);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = SceneConfig::from_file(Path::new("/nonexistent/scene.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
