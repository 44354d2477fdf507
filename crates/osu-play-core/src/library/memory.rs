//! In-memory beatmap store

use std::path::{Path, PathBuf};

use crate::beatmap::BeatmapSet;
use crate::error::Result;
use crate::lazer::LazerFileStore;
use crate::library::BeatmapStore;

/// A [`BeatmapStore`] over records already held in memory.
///
/// Paths are laid out like osu!lazer's file store under `data_path`.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    sets: Vec<BeatmapSet>,
    file_store: LazerFileStore,
}

impl MemoryStore {
    pub fn new(data_path: &Path, sets: Vec<BeatmapSet>) -> Self {
        Self {
            sets,
            file_store: LazerFileStore::new(data_path),
        }
    }
}

impl BeatmapStore for MemoryStore {
    fn beatmap_sets(&self) -> Result<Vec<BeatmapSet>> {
        Ok(self.sets.clone())
    }

    fn path_for(&self, hash: &str) -> Option<PathBuf> {
        self.file_store.hash_to_path(hash)
    }
}
