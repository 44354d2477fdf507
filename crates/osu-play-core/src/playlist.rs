//! Playlist export
//!
//! The playlist is plain text with one file path per line, joined by `\n`
//! with no trailing newline. Tracks without a path are left out. Paths are
//! written byte for byte on unix; elsewhere they must be valid Unicode.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::library::UniqueTrack;

/// Outcome of a playlist export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Paths written to the playlist
    pub written: usize,
    /// Tracks omitted because they have no path
    pub skipped: usize,
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Result<&[u8]> {
    use std::os::unix::ffi::OsStrExt;
    Ok(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Result<&[u8]> {
    path.to_str()
        .map(str::as_bytes)
        .ok_or_else(|| crate::error::Error::NonUnicodePath(path.to_path_buf()))
}

/// Render the playlist contents for `tracks`
pub fn render_playlist(tracks: &[UniqueTrack]) -> Result<(Vec<u8>, ExportSummary)> {
    let mut content = Vec::new();
    let mut summary = ExportSummary::default();

    for path in tracks.iter().filter_map(|t| t.path.as_deref()) {
        if summary.written > 0 {
            content.push(b'\n');
        }
        content.extend_from_slice(path_bytes(path)?);
        summary.written += 1;
    }

    summary.skipped = tracks.len() - summary.written;
    Ok((content, summary))
}

/// Write the playlist for `tracks` to `dest`, replacing any existing file
pub fn export_playlist(tracks: &[UniqueTrack], dest: &Path) -> Result<ExportSummary> {
    let (content, summary) = render_playlist(tracks)?;

    let mut file = File::create(dest)?;
    file.write_all(&content)?;

    tracing::info!(
        "Exported {} tracks to {} ({} without a path skipped)",
        summary.written,
        dest.display(),
        summary.skipped
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn track(title: &str, path: Option<&str>) -> UniqueTrack {
        UniqueTrack {
            title: title.to_string(),
            hash: title.to_lowercase(),
            path: path.map(PathBuf::from),
        }
    }

    #[test]
    fn test_export_reads_back_in_order() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("playlist.m3u");
        let tracks = vec![
            track("a", Some("/files/a/aa/aaaa")),
            track("b", Some("/files/b/bb/bbbb")),
            track("c", Some("/files/c/cc/cccc")),
        ];

        let summary = export_playlist(&tracks, &dest).unwrap();
        assert_eq!(summary, ExportSummary { written: 3, skipped: 0 });

        let content = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(content.matches('\n').count(), 2);
        assert!(!content.ends_with('\n'));

        let lines: Vec<&str> = content.split('\n').collect();
        assert_eq!(lines, vec!["/files/a/aa/aaaa", "/files/b/bb/bbbb", "/files/c/cc/cccc"]);
    }

    #[test]
    fn test_tracks_without_path_are_omitted() {
        let tracks = vec![
            track("a", Some("/one")),
            track("b", None),
            track("c", Some("/three")),
        ];

        let (content, summary) = render_playlist(&tracks).unwrap();
        assert_eq!(content, b"/one\n/three");
        assert_eq!(summary, ExportSummary { written: 2, skipped: 1 });
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_written_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("playlist.txt");
        let raw = b"/osu/\xff\xfe/files/a/ab/abcd";
        let tracks = vec![
            track("a", Some("/first")),
            UniqueTrack {
                title: "b".to_string(),
                hash: "abcd".to_string(),
                path: Some(PathBuf::from(OsStr::from_bytes(raw))),
            },
        ];

        export_playlist(&tracks, &dest).unwrap();

        let mut expected = b"/first\n".to_vec();
        expected.extend_from_slice(raw);
        assert_eq!(std::fs::read(&dest).unwrap(), expected);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("playlist.txt");
        std::fs::write(&dest, "old line 1\nold line 2\nold line 3\n").unwrap();

        export_playlist(&[track("a", Some("/new"))], &dest).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "/new");
    }

    #[test]
    fn test_export_empty_list_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("empty.txt");

        let summary = export_playlist(&[], &dest).unwrap();
        assert_eq!(summary.written, 0);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing").join("playlist.txt");

        let result = export_playlist(&[track("a", Some("/a"))], &dest);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
