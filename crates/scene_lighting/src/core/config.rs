//! # Lighting Configuration
//!
//! Serializable settings for the lighting subsystem: the log filter used by
//! the host application, the default light's initial state, and how many
//! lights are packed for the shading stage.
//!
//! Files are read through the [`Config`] trait in `.toml` or `.ron`:
//!
//! ```toml
//! log_level = "info"
//! max_lights = 16
//!
//! [default_light]
//! light_type = "Sky"
//! position = [0.0, 1.0, -1.0]
//! color = [1.0, 1.0, 1.0, 1.0]
//! attenuation = 1.0
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};
use crate::foundation::math::{Vec3, Vec4};
use crate::lighting::{Light, LightType, MAX_ATTENUATION, MAX_LIGHTS, MIN_ATTENUATION};

/// Initial state of a light as written in configuration files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    /// Light type
    pub light_type: LightType,
    /// World position (direction for sky lights)
    pub position: [f32; 3],
    /// RGB + intensity
    pub color: [f32; 4],
    /// Attenuation factor
    pub attenuation: f32,
}

impl LightSettings {
    /// Settings of the stock default light: a white sky light overhead and behind
    pub fn default_sky() -> Self {
        Self {
            light_type: LightType::Sky,
            position: [0.0, 1.0, -1.0],
            color: [1.0, 1.0, 1.0, 1.0],
            attenuation: 1.0,
        }
    }

    /// Build a light from these settings
    ///
    /// Attenuation goes through the usual clamp, so this never fails.
    pub fn to_light(&self) -> Light {
        Light::new(self.light_type)
            .with_position(Vec3::from(self.position))
            .with_color(Vec4::from(self.color))
            .with_attenuation(self.attenuation)
    }

    /// Check the settings without correcting them
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ATTENUATION..=MAX_ATTENUATION).contains(&self.attenuation) {
            return Err(ConfigError::Invalid(format!(
                "attenuation {} outside [{}, {}]",
                self.attenuation, MIN_ATTENUATION, MAX_ATTENUATION
            )));
        }
        if self.position.iter().chain(self.color.iter()).any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("light position and color must be finite".to_string()));
        }
        Ok(())
    }
}

impl Default for LightSettings {
    fn default() -> Self {
        Self::default_sky()
    }
}

/// Top-level lighting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Log filter for the host application
    pub log_level: String,
    /// Lights packed per frame before the rest are dropped
    pub max_lights: usize,
    /// Initial state of the default light
    pub default_light: LightSettings,
}

impl LightingConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            max_lights: MAX_LIGHTS,
            default_light: LightSettings::default_sky(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the packed light limit
    pub fn with_max_lights(mut self, max_lights: usize) -> Self {
        self.max_lights = max_lights;
        self
    }

    /// Set the default light's initial state
    pub fn with_default_light(mut self, settings: LightSettings) -> Self {
        self.default_light = settings;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))?;

        if self.max_lights == 0 || self.max_lights > MAX_LIGHTS {
            return Err(ConfigError::Invalid(format!(
                "max_lights must be between 1 and {}, got {}",
                MAX_LIGHTS, self.max_lights
            )));
        }

        self.default_light.validate()
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for LightingConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LightingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_light.light_type, LightType::Sky);
        assert_eq!(config.default_light.position, [0.0, 1.0, -1.0]);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = LightingConfig::new()
            .with_log_level("debug")
            .with_max_lights(4)
            .with_default_light(LightSettings {
                light_type: LightType::Point,
                position: [1.0, 2.0, 3.0],
                color: [0.5, 0.5, 1.0, 2.0],
                attenuation: 12.5,
            });

        let text = config.to_string_with_format(ConfigFormat::Toml).unwrap();
        let parsed = LightingConfig::from_str_with_format(&text, ConfigFormat::Toml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_roundtrip() {
        let config = LightingConfig::new().with_log_level("warn");

        let text = config.to_string_with_format(ConfigFormat::Ron).unwrap();
        let parsed = LightingConfig::from_str_with_format(&text, ConfigFormat::Ron).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = r#"
            log_level = "trace"

            [default_light]
            light_type = "Spot"
        "#;

        let parsed = LightingConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();

        assert_eq!(parsed.log_level, "trace");
        assert_eq!(parsed.max_lights, MAX_LIGHTS);
        assert_eq!(parsed.default_light.light_type, LightType::Spot);
        assert_eq!(parsed.default_light.attenuation, 1.0);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = LightingConfig::from_str_with_format("max_lights = \"many\"", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = LightingConfig::default();
        config.default_light.attenuation = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = LightingConfig::default();
        config.default_light.color[0] = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = LightingConfig::default().with_max_lights(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = LightingConfig::default().with_log_level("loud");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_settings_build_matching_light() {
        let settings = LightSettings {
            light_type: LightType::Point,
            position: [1.0, 0.0, 2.0],
            color: [0.3, 0.3, 0.3, 1.0],
            attenuation: 5000.0,
        };

        let light = settings.to_light();

        assert_eq!(light.light_type(), LightType::Point);
        assert_eq!(light.values().position, Vec4::new(1.0, 0.0, 2.0, 1.0));
        assert_eq!(light.color(), Vec4::new(0.3, 0.3, 0.3, 1.0));
        assert_eq!(light.attenuation(), MAX_ATTENUATION);
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("scene_lighting_config_{}.toml", std::process::id()));
        let config = LightingConfig::new().with_max_lights(8);

        config.save_to_file(&path).unwrap();
        let loaded = LightingConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LightingConfig::load_from_file("/nonexistent/lighting.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
