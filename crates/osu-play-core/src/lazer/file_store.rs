//! osu!lazer hash-based file storage

use std::path::{Path, PathBuf};

/// Handler for osu!lazer's hash-based file storage
///
/// Files are stored at: `files/{hash[0]}/{hash[0..2]}/{hash}`
/// Where `hash` is the lowercase SHA-256 hex digest
#[derive(Debug, Clone)]
pub struct LazerFileStore {
    files_path: PathBuf,
}

impl LazerFileStore {
    /// Create a new file store handler
    pub fn new(lazer_data_path: &Path) -> Self {
        Self {
            files_path: lazer_data_path.join("files"),
        }
    }

    /// Get the storage path for a given hash.
    ///
    /// Returns `None` for hashes that cannot be sharded (shorter than two
    /// characters or not hex). The file is not required to exist.
    pub fn hash_to_path(&self, hash: &str) -> Option<PathBuf> {
        let hash = hash.trim().to_lowercase();
        if hash.len() < 2 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        Some(
            self.files_path
                .join(&hash[0..1])
                .join(&hash[0..2])
                .join(&hash),
        )
    }
}
