//! Playback loop
//!
//! The loop moves through three states: a track is `Playing`, the loop is
//! `Waiting` out the gap before the next track, or it is `Done`. Failures on
//! a single track are logged and skipped, they never end the loop.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::library::UniqueTrack;
use crate::playback::Player;

/// Gap between two consecutive tracks
pub const TRACK_DELAY: Duration = Duration::from_millis(1000);

/// State of the playback loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Playing the track at this index
    Playing(usize),
    /// Waiting before playing the track at this index
    Waiting(usize),
    Done,
}

/// State that follows playing the track at `cursor` in a list of `len`.
///
/// Wrapping around to the start skips the delay, which only separates
/// consecutive tracks within a pass. A single-track list, or a pass in which
/// nothing reached the player (`pass_played` unset), waits before wrapping.
pub fn next_state(cursor: usize, len: usize, looping: bool, pass_played: bool) -> PlaybackState {
    if cursor + 1 < len {
        PlaybackState::Waiting(cursor + 1)
    } else if !looping {
        PlaybackState::Done
    } else if len > 1 && pass_played {
        PlaybackState::Playing(0)
    } else {
        PlaybackState::Waiting(0)
    }
}

/// Why a track was not played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The hash could not be mapped to a file
    NoPath,
    /// The file is not on disk
    MissingFile(PathBuf),
    /// The player could not be started or reported failure
    PlayerFailed(String),
}

/// What happened during a playback run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Indices handed to the player, in order
    pub played: Vec<usize>,
    /// Indices that were skipped, in order
    pub skipped: Vec<(usize, SkipReason)>,
}

/// Playback settings
#[derive(Debug, Clone, Copy)]
pub struct PlaybackOptions {
    /// Start over from the first track after the last one
    pub looping: bool,
    /// Gap between consecutive tracks
    pub delay: Duration,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            looping: false,
            delay: TRACK_DELAY,
        }
    }
}

/// Plays tracks one at a time through a [`Player`]
pub struct PlaybackLoop<P> {
    player: P,
    options: PlaybackOptions,
    cancelled: Arc<AtomicBool>,
}

impl<P: Player> PlaybackLoop<P> {
    pub fn new(player: P, options: PlaybackOptions) -> Self {
        Self {
            player,
            options,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share an existing cancellation flag
    pub fn with_cancellation_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancelled = flag;
        self
    }

    /// Flag that stops the loop before the next track once set
    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Play `tracks` starting at `start`.
    ///
    /// Returns when the last track has been handled (without looping) or
    /// the cancellation flag is set.
    pub async fn run(&self, tracks: &[UniqueTrack], start: usize) -> Result<PlaybackReport> {
        if start >= tracks.len() {
            return Err(Error::InvalidStartIndex {
                index: start,
                len: tracks.len(),
            });
        }

        let mut report = PlaybackReport::default();
        let mut state = PlaybackState::Playing(start);
        let mut pass_played = false;

        loop {
            if self.cancelled.load(Ordering::SeqCst) {
                tracing::debug!("Playback cancelled");
                state = PlaybackState::Done;
            }

            match state {
                PlaybackState::Playing(cursor) => {
                    pass_played |= self.play_track(cursor, tracks, &mut report).await;
                    state = next_state(cursor, tracks.len(), self.options.looping, pass_played);
                    if cursor + 1 == tracks.len() {
                        pass_played = false;
                    }
                }
                PlaybackState::Waiting(next) => {
                    tokio::time::sleep(self.options.delay).await;
                    state = PlaybackState::Playing(next);
                }
                PlaybackState::Done => break,
            }
        }

        Ok(report)
    }

    /// Hand one track to the player. Returns whether it played.
    async fn play_track(
        &self,
        index: usize,
        tracks: &[UniqueTrack],
        report: &mut PlaybackReport,
    ) -> bool {
        let track = &tracks[index];

        let Some(path) = &track.path else {
            tracing::warn!("No file location for {}, skipping", track.title);
            report.skipped.push((index, SkipReason::NoPath));
            return false;
        };

        if !path.is_file() {
            tracing::warn!("{}", Error::MissingFile(path.clone()));
            report
                .skipped
                .push((index, SkipReason::MissingFile(path.clone())));
            return false;
        }

        tracing::info!("Now playing [{}/{}]: {}", index + 1, tracks.len(), track.title);
        match self.player.play(path).await {
            Ok(()) => {
                report.played.push(index);
                true
            }
            Err(e) => {
                tracing::warn!("{} failed on {}: {}", self.player.name(), track.title, e);
                report
                    .skipped
                    .push((index, SkipReason::PlayerFailed(e.to_string())));
                false
            }
        }
    }
}
