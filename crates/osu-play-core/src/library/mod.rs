//! Read-only view over an osu! beatmap library
//!
//! - [`BeatmapStore`] - capability interface implemented by database backends
//! - [`MemoryStore`] - store backed by in-memory records
//! - [`enumerate`] - deduplicated track listing

mod memory;
mod tracks;

pub use memory::*;
pub use tracks::*;

use std::path::PathBuf;

use crate::beatmap::BeatmapSet;
use crate::error::Result;

/// Read-only access to the beatmap sets of an osu! installation
pub trait BeatmapStore {
    /// All beatmap sets, in store iteration order
    fn beatmap_sets(&self) -> Result<Vec<BeatmapSet>>;

    /// Resolve a filename inside `set` to its content hash.
    ///
    /// Absent or blank names resolve to `None`.
    fn resolve_hash(&self, file_name: Option<&str>, set: &BeatmapSet) -> Option<String> {
        let name = file_name.map(str::trim).filter(|n| !n.is_empty())?;
        set.find_file(name).map(|f| f.hash.clone())
    }

    /// Map a content hash to its location on disk. Performs no I/O.
    fn path_for(&self, hash: &str) -> Option<PathBuf>;
}
