//! Beatmap metadata structures

/// Metadata for a beatmap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeatmapMetadata {
    /// Romanized song title
    pub title: String,
    /// Romanized artist name
    pub artist: String,
    /// Unicode song title
    pub title_unicode: Option<String>,
    /// Unicode artist name
    pub artist_unicode: Option<String>,
    /// Audio filename, as named inside the beatmap set
    pub audio_file: Option<String>,
}

impl BeatmapMetadata {
    /// Build the title shown in the selector and playback log:
    /// `"{Title} : {Artist} - {TitleUnicode} : {ArtistUnicode}"`
    pub fn track_title(&self) -> String {
        format!(
            "{} : {} - {} : {}",
            self.title,
            self.artist,
            self.title_unicode.as_deref().unwrap_or_default(),
            self.artist_unicode.as_deref().unwrap_or_default(),
        )
    }

    /// Audio filename, or `None` when absent or blank
    pub fn audio_file(&self) -> Option<&str> {
        self.audio_file
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_title() {
        let meta = BeatmapMetadata {
            title: "Kimi no Shiranai Monogatari".to_string(),
            artist: "supercell".to_string(),
            title_unicode: Some("君の知らない物語".to_string()),
            artist_unicode: Some("supercell".to_string()),
            audio_file: Some("audio.mp3".to_string()),
        };
        assert_eq!(
            meta.track_title(),
            "Kimi no Shiranai Monogatari : supercell - 君の知らない物語 : supercell"
        );
    }

    #[test]
    fn test_track_title_without_unicode() {
        let meta = BeatmapMetadata {
            title: "Song".to_string(),
            artist: "Artist".to_string(),
            ..Default::default()
        };
        assert_eq!(meta.track_title(), "Song : Artist -  : ");
    }

    #[test]
    fn test_blank_audio_file_is_absent() {
        let mut meta = BeatmapMetadata::default();
        assert_eq!(meta.audio_file(), None);

        meta.audio_file = Some("   ".to_string());
        assert_eq!(meta.audio_file(), None);

        meta.audio_file = Some("song.mp3".to_string());
        assert_eq!(meta.audio_file(), Some("song.mp3"));
    }
}
