//! Deduplicated enumeration of beatmap audio tracks

use std::collections::HashSet;
use std::path::PathBuf;

use crate::beatmap::BeatmapSet;
use crate::error::Result;
use crate::library::BeatmapStore;

/// One playable audio file, shared by every beatmap that references it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueTrack {
    /// Display title, taken from the first beatmap using this audio
    pub title: String,
    /// Content hash of the audio file
    pub hash: String,
    /// Location in the file store, `None` if the hash can't be mapped
    pub path: Option<PathBuf>,
}

/// Enumerate the unique audio tracks of a store.
///
/// Tracks are deduplicated by audio hash; the first beatmap in store order
/// wins. Beatmaps without a resolvable audio file are skipped.
pub fn enumerate<S: BeatmapStore + ?Sized>(store: &S) -> Result<Vec<UniqueTrack>> {
    let sets = store.beatmap_sets()?;
    Ok(unique_tracks(store, &sets))
}

/// Same as [`enumerate`], over sets that were already loaded
pub fn unique_tracks<S: BeatmapStore + ?Sized>(store: &S, sets: &[BeatmapSet]) -> Vec<UniqueTrack> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut tracks = Vec::new();
    let mut unresolved = 0usize;

    for set in sets {
        for beatmap in &set.beatmaps {
            let Some(hash) = store.resolve_hash(beatmap.metadata.audio_file(), set) else {
                unresolved += 1;
                continue;
            };

            if !seen.insert(hash.clone()) {
                continue;
            }

            let path = store.path_for(&hash);
            tracks.push(UniqueTrack {
                title: beatmap.metadata.track_title(),
                hash,
                path,
            });
        }
    }

    tracing::debug!(
        "Enumerated {} unique tracks from {} sets ({} beatmaps without audio)",
        tracks.len(),
        sets.len(),
        unresolved
    );

    tracks
}
