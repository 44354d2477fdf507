//! Error types for osu-play-core

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for osu-play operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("osu! database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("osu! database not found at: {0}")]
    OsuNotFound(PathBuf),

    #[error(
        "osu!lazer Realm database found at {0}, but only the legacy client.db format can be read"
    )]
    UnsupportedRealm(PathBuf),

    #[error("Path is not valid Unicode: {0}")]
    NonUnicodePath(PathBuf),

    #[error("Track file does not exist: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to launch player `{program}`: {source}")]
    PlayerLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Player `{program}` exited with {status}")]
    PlayerExit { program: String, status: String },

    #[error("Start index {index} is out of range for {len} tracks")]
    InvalidStartIndex { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for osu-play operations
pub type Result<T> = std::result::Result<T, Error>;
