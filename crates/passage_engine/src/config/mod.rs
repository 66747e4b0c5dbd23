//! Configuration system
//!
//! Typed configuration with defaults that match the built-in behavior, plus a
//! dual-format (TOML/RON) load/save trait for hosts that want the toggler
//! tunable from a file.

pub use serde::{Deserialize, Serialize};

use crate::session::input::KeyBindings;
use crate::synthetic::SyntheticCluster;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Toggle session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Radius of the near-player toggle, in world units
    pub max_distance: f32,

    /// Step applied by the radius increase/decrease commands
    pub radius_step: f32,

    /// Identifier of the scene whose load (re)initializes the session
    pub main_scene: String,

    /// Input chord bindings
    pub bindings: KeyBindings,

    /// Synthetic clusters initialized at scene load
    pub clusters: Vec<SyntheticCluster>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_distance: 70.0,
            radius_step: 10.0,
            main_scene: "SolarSystem".to_string(),
            bindings: KeyBindings::default(),
            clusters: vec![SyntheticCluster::gravity_floor_stack()],
        }
    }
}

impl Config for SessionConfig {}

impl SessionConfig {
    /// A config with no synthetic clusters and a tiny radius, for tests
    pub fn minimal() -> Self {
        Self {
            clusters: Vec::new(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_defaults_match_builtin_behavior() {
        let config = SessionConfig::default();
        assert_eq!(config.max_distance, 70.0);
        assert_eq!(config.radius_step, 10.0);
        assert_eq!(config.main_scene, "SolarSystem");
        assert_eq!(config.clusters.len(), 1);
        assert_eq!(config.clusters[0].count, 9);
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("passage_session_config.toml");
        let config = SessionConfig::default();
        config.save_to_file(&path).unwrap();

        let loaded = SessionConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.max_distance, config.max_distance);
        assert_eq!(loaded.clusters, config.clusters);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("passage_session_config.ron");
        let config = SessionConfig::default();
        config.save_to_file(&path).unwrap();

        let loaded = SessionConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.main_scene, config.main_scene);
        assert_eq!(loaded.bindings, config.bindings);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = SessionConfig::load_from_file("settings.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
