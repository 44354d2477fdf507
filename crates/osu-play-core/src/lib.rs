//! # osu-play-core
//!
//! Core library for playing the audio of an osu!lazer beatmap library.
//!
//! This crate provides:
//! - Reading beatmap sets and their files from osu!lazer's database
//! - Resolving audio files to osu!lazer's content-addressed file store
//! - Enumerating unique audio tracks (deduplicated by content hash)
//! - Exporting tracks as a newline-delimited playlist
//! - Sequential playback through an external player
//!
//! ## Modules
//!
//! - [`beatmap`] - Beatmap data structures (sets, metadata, files)
//! - [`config`] - Configuration and path detection
//! - [`error`] - Error types and Result alias
//! - [`lazer`] - osu!lazer database and file store
//! - [`library`] - Store abstraction and track enumeration
//! - [`playback`] - Player invocation and the playback loop
//! - [`playlist`] - Playlist export
//!
//! ## Example
//!
//! ```no_run
//! use osu_play_core::{enumerate, export_playlist, LazerDatabase, StoreOptions};
//! use std::path::Path;
//!
//! let db = LazerDatabase::open(Path::new("/home/me/.local/share/osu"), &StoreOptions::default())?;
//! let tracks = enumerate(&db)?;
//! export_playlist(&tracks, Path::new("playlist.txt"))?;
//! # Ok::<(), osu_play_core::Error>(())
//! ```

// Module declarations
pub mod beatmap;
pub mod config;
pub mod error;
pub mod lazer;
pub mod library;
pub mod playback;
pub mod playlist;

// Re-export key types for convenience

// Error types
pub use error::{Error, Result};

// Beatmap types
pub use beatmap::{Beatmap, BeatmapMetadata, BeatmapSet, NamedFile};

// Configuration
pub use config::{
    default_config_dir, default_osu_data_dir, detect_lazer_path, validate_lazer_path, Config,
};

// osu!lazer integration
pub use lazer::{LazerDatabase, LazerFileStore, StoreOptions};

// Library
pub use library::{enumerate, BeatmapStore, MemoryStore, UniqueTrack};

// Playback
pub use playback::{
    PlaybackLoop, PlaybackOptions, PlaybackReport, PlaybackState, Player, PlayerCommand,
    SkipReason, TRACK_DELAY,
};

// Playlist
pub use playlist::{export_playlist, ExportSummary};
