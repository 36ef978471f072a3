//! Session configuration
//!
//! Only the canvas geometry and the RNG seed are configurable; every gameplay
//! constant lives in `consts`.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must be at least {min_width}x{min_height}, got {width}x{height}")]
    InvalidDimensions {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Canvas size and seed for one world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Smallest canvas every spawner stays inside of
    pub const MIN_WIDTH: f32 = PLATFORM_MAX_WIDTH;
    pub const MIN_HEIGHT: f32 = SPAWN_BOTTOM_CLEARANCE + GROUND_HEIGHT;

    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self { width, height, seed }
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width >= Self::MIN_WIDTH
            && self.height >= Self::MIN_HEIGHT;
        if ok {
            Ok(())
        } else {
            log::warn!("Rejected canvas {}x{}", self.width, self.height);
            Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min_width: Self::MIN_WIDTH,
                min_height: Self::MIN_HEIGHT,
            })
        }
    }

    /// Where the player appears at start and after losing a life
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - PLAYER_WIDTH / 2.0,
            self.height - SPAWN_OFFSET_Y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        for (w, h) in [(0.0, 600.0), (800.0, -1.0), (f32::NAN, 600.0), (150.0, 600.0)] {
            let err = GameConfig::new(w, h, 1).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidDimensions { .. }));
        }
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"width": 10}"#),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(format!("pixel-jumper-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"width": 640, "seed": 3}"#).unwrap();
        let config = GameConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config, GameConfig::new(640.0, DEFAULT_HEIGHT, 3));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("pixel-jumper-does-not-exist.json");
        let err = GameConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("pixel-jumper-does-not-exist.json"));
    }

    #[test]
    fn test_spawn_point_centered() {
        let config = GameConfig::default();
        assert_eq!(config.spawn_point(), Vec2::new(385.0, 500.0));
    }
}
