//! Configuration and path detection

mod paths;

pub use paths::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::playback::{PlayerCommand, TRACK_DELAY};

/// Config filename inside the config directory
pub const CONFIG_FILE: &str = "config.json";

/// Configuration for osu-play, stored as JSON in the config directory.
/// Command line flags take precedence over these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to osu!lazer data directory
    pub osu_data_dir: Option<PathBuf>,
    /// Player to use instead of the system opener
    pub player: Option<PlayerCommand>,
    /// Gap between tracks in milliseconds
    pub track_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            osu_data_dir: None,
            player: None,
            track_delay_ms: TRACK_DELAY.as_millis() as u64,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load config from `config_dir`, falling back to defaults if it is
    /// missing or unreadable
    pub fn load(config_dir: &Path) -> Self {
        let path = Self::config_path(config_dir);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `config_dir`
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)?;
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(Self::config_path(config_dir), content)?;
        Ok(())
    }

    /// Player to use, the system opener unless configured
    pub fn player(&self) -> PlayerCommand {
        self.player.clone().unwrap_or_default()
    }

    /// Gap between tracks
    pub fn track_delay(&self) -> Duration {
        Duration::from_millis(self.track_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path());
        assert_eq!(config, Config::default());
        assert_eq!(config.track_delay(), Duration::from_millis(1000));
        assert_eq!(config.player(), PlayerCommand::system_default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join("osu-play");
        let config = Config {
            osu_data_dir: Some(PathBuf::from("/games/osu")),
            player: Some(PlayerCommand::new("mpv")),
            track_delay_ms: 250,
        };

        config.save(&config_dir).unwrap();
        assert_eq!(Config::load(&config_dir), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "player": { "program": "mpv", "args": ["--no-video"] } }"#,
        )
        .unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.player().program, "mpv");
        assert_eq!(config.track_delay_ms, 1000);
        assert_eq!(config.osu_data_dir, None);
    }

    #[test]
    fn test_invalid_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not json").unwrap();
        assert_eq!(Config::load(dir.path()), Config::default());
    }
}
