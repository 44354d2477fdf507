//! Platform-specific path detection for osu!lazer and osu-play

use std::path::{Path, PathBuf};

use crate::lazer::{DATABASE_FILE, REALM_FILE};

/// Directory name of osu!lazer's data folder
const OSU_DIR_NAME: &str = "osu";

/// Directory name of osu-play's own config folder
const CONFIG_DIR_NAME: &str = "osu-play";

/// Check if a path is a valid osu!lazer data directory
/// Looks for: client.db or client.realm file
pub fn validate_lazer_path(path: &Path) -> bool {
    path.is_dir() && (path.join(DATABASE_FILE).is_file() || path.join(REALM_FILE).is_file())
}

/// Detect osu!lazer data directory
pub fn detect_lazer_path() -> Option<PathBuf> {
    [dirs::data_dir(), dirs::data_local_dir()]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(OSU_DIR_NAME))
        .find(|path| validate_lazer_path(path))
}

/// Default osu!lazer data directory: the detected one, otherwise
/// `<data dir>/osu`
pub fn default_osu_data_dir() -> PathBuf {
    detect_lazer_path().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(OSU_DIR_NAME)
    })
}

/// Default config directory: `<config dir>/osu-play`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_dirs_are_named() {
        assert!(default_osu_data_dir().ends_with(OSU_DIR_NAME));
        assert!(default_config_dir().ends_with(CONFIG_DIR_NAME));
    }

    #[test]
    fn test_validate_lazer_path() {
        let dir = TempDir::new().unwrap();
        assert!(!validate_lazer_path(dir.path()));

        std::fs::write(dir.path().join(DATABASE_FILE), b"").unwrap();
        assert!(validate_lazer_path(dir.path()));
        assert!(!validate_lazer_path(&dir.path().join("missing")));
    }

    #[test]
    fn test_realm_only_dir_is_a_lazer_install() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(REALM_FILE), b"realm").unwrap();
        assert!(validate_lazer_path(dir.path()));
    }
}
