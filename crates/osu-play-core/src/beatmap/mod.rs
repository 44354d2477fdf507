//! Beatmap data structures and types

mod metadata;

pub use metadata::*;

/// A file inside a beatmap set, addressed by its content hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFile {
    /// Original filename
    pub filename: String,
    /// SHA-256 hash of the file content
    pub hash: String,
}

/// A single beatmap difficulty
#[derive(Debug, Clone, Default)]
pub struct Beatmap {
    /// Row id in the database
    pub id: i64,
    /// Online beatmap ID
    pub online_id: Option<i64>,
    pub metadata: BeatmapMetadata,
}

/// A beatmap set containing multiple difficulties and their files
#[derive(Debug, Clone, Default)]
pub struct BeatmapSet {
    /// Row id in the database
    pub id: i64,
    /// Online beatmap set ID (if available)
    pub online_id: Option<i64>,
    /// All difficulties in this set, in store order
    pub beatmaps: Vec<Beatmap>,
    /// All files (audio, backgrounds, .osu files, etc.)
    pub files: Vec<NamedFile>,
}

impl BeatmapSet {
    /// Create a new empty beatmap set
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Find a file by name.
    ///
    /// Matching is case-insensitive, like osu!lazer's own lookup.
    pub fn find_file(&self, filename: &str) -> Option<&NamedFile> {
        let wanted = filename.to_lowercase();
        self.files
            .iter()
            .find(|f| f.filename.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with_files(files: &[(&str, &str)]) -> BeatmapSet {
        BeatmapSet {
            files: files
                .iter()
                .map(|(filename, hash)| NamedFile {
                    filename: filename.to_string(),
                    hash: hash.to_string(),
                })
                .collect(),
            ..BeatmapSet::new(1)
        }
    }

    #[test]
    fn test_find_file_ignores_case() {
        let set = set_with_files(&[("Audio.MP3", "abc"), ("bg.jpg", "def")]);
        assert_eq!(set.find_file("audio.mp3").map(|f| f.hash.as_str()), Some("abc"));
        assert_eq!(set.find_file("BG.JPG").map(|f| f.hash.as_str()), Some("def"));
    }

    #[test]
    fn test_find_file_missing() {
        let set = set_with_files(&[("audio.mp3", "abc")]);
        assert!(set.find_file("audio.ogg").is_none());
    }
}
