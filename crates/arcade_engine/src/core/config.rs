//! # Engine Configuration
//!
//! Core engine behavior: logging, the debug overlay, and the virtual screen
//! that world coordinates are laid out on.

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::render::ScreenMapping;

/// # Screen Configuration
///
/// Size of the virtual game screen. The host scales this surface to the
/// real window; the engine only sees the resulting [`ScreenMapping`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Virtual screen width in pixels
    pub width: f32,
    /// Virtual screen height in pixels
    pub height: f32,
}

impl ScreenConfig {
    /// Identity mapping over the virtual screen
    pub fn identity_mapping(&self) -> ScreenMapping {
        ScreenMapping::identity(self.width, self.height)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// # Engine Configuration
///
/// Core engine behavior configuration including logging and debug features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Whether the gizmo overlay is collected each frame
    pub debug_gizmos: bool,
    /// Virtual screen
    pub screen: ScreenConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_gizmos: cfg!(debug_assertions),
            screen: ScreenConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable or disable the gizmo overlay
    pub fn with_debug_gizmos(mut self, enabled: bool) -> Self {
        self.debug_gizmos = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if self.log_level.is_empty() {
            return Err(ConfigError::Invalid("log level cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_screen() {
        let mut config = EngineConfig::default();
        config.screen.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_toml_round_trip_keeps_screen() {
        let config = EngineConfig::default().with_log_level("debug");
        let text = toml::to_string_pretty(&config).expect("serialize");
        let parsed: EngineConfig = toml::from_str(&text).expect("parse");
        assert_eq!(parsed.log_level, "debug");
        assert_eq!(parsed.screen, config.screen);
    }

    #[test]
    fn test_identity_mapping_covers_screen() {
        let mapping = ScreenConfig { width: 200.0, height: 100.0 }.identity_mapping();
        assert!(mapping.is_visible(Vec2::new(199.0, 99.0)));
        assert!(!mapping.is_visible(Vec2::new(200.0, 50.0)));
    }
}
